//! SMTP 발송 구현
//!
//! lettre 의 `AsyncSmtpTransport` 로 메일을 발송한다.
//! 개발 환경에서는 Mailpit(로컬 SMTP 서버)에 접속한다.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Message, SinglePart, header::ContentType},
};
use moing_domain::email::{NotificationError, OutboundEmail, SendResponse};

use super::MailSender;

/// SMTP 발송
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` 를 감싼다.
/// Mailpit(개발)이나 SMTP 릴레이(테스트 환경)에서 사용한다.
/// SMTP 에는 Mailgun 식 메시지 식별자가 없으므로 접수 응답은 고정
/// 확인문으로 대신한다.
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailSender {
    /// 새 SMTP 발송 인스턴스를 생성한다
    ///
    /// # 인자
    ///
    /// - `host`: SMTP 서버 호스트명 (예: "localhost")
    /// - `port`: SMTP 서버 포트 번호 (예: Mailpit 은 1025)
    pub fn new(host: &str, port: u16) -> Self {
        // builder_dangerous: TLS 없이 접속 (Mailpit 등 로컬 SMTP 용)
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self { transport }
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SendResponse, NotificationError> {
        let mut builder = Message::builder()
            .from(email.from_mailbox().parse().map_err(|e| {
                NotificationError::SendFailed(format!("발신자 주소 불량: {e}"))
            })?)
            .subject(&email.subject);

        for to in &email.to {
            builder = builder.to(to
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("수신자 주소 불량: {e}")))?);
        }

        let message = builder
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(email.html_body.clone()),
            )
            .map_err(|e| NotificationError::SendFailed(format!("메시지 구성 실패: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 발송 실패: {e}")))?;

        Ok(SendResponse {
            id:      "smtp".to_string(),
            message: "250 Ok".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 트레이트는_send_와_sync_를_구현한다() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmtpMailSender>();
    }
}
