//! Noop 발송 구현
//!
//! 메일을 실제로 발송하지 않고 로그 출력만 한다.
//! 테스트 환경이나 발송 비활성화 시에 사용한다.

use async_trait::async_trait;
use moing_domain::email::{NotificationError, OutboundEmail, SendResponse};

use super::MailSender;

/// Noop 발송 (로그 출력만)
#[derive(Debug, Clone)]
pub struct NoopMailSender;

#[async_trait]
impl MailSender for NoopMailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SendResponse, NotificationError> {
        tracing::info!(
            to = ?email.to,
            subject = %email.subject,
            "Noop: 메일 발송을 건너뜀"
        );
        Ok(SendResponse {
            id:      "noop".to_string(),
            message: "발송하지 않음".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_가_에러를_돌려주지_않는다() {
        let sender = NoopMailSender;
        let email = OutboundEmail {
            from_name:    "모잉".to_string(),
            from_address: "noreply@moing.shop".to_string(),
            to:           vec!["test@example.com".to_string()],
            subject:      "테스트 제목".to_string(),
            html_body:    "<p>테스트</p>".to_string(),
        };

        let response = sender.send(&email).await.unwrap();
        assert_eq!(response.id, "noop");
    }
}
