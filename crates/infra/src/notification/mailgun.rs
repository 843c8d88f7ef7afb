//! Mailgun 발송 구현
//!
//! Mailgun Messages API(v3) 로 메일을 발송한다. 운영 환경에서 사용한다.

use async_trait::async_trait;
use moing_domain::email::{NotificationError, OutboundEmail, SendResponse};

use super::MailSender;

/// Mailgun 발송
///
/// `reqwest::Client` 를 감싸 `POST {api_base}/v3/{domain}/messages` 를
/// 호출한다. 인증은 HTTP Basic(`api` + API 키), 본문은 form 인코딩이다.
/// `api_base` 는 테스트에서 스텁 서버로 바꿔 끼울 수 있다.
pub struct MailgunMailSender {
    http_client: reqwest::Client,
    api_base:    String,
    api_key:     String,
    domain:      String,
}

impl MailgunMailSender {
    /// 새 Mailgun 발송 인스턴스를 생성한다
    ///
    /// # 인자
    ///
    /// - `api_base`: API 베이스 URL (운영: `https://api.mailgun.net`)
    /// - `api_key`: Mailgun API 키
    /// - `domain`: 발송 도메인 (예: `moing.shop`)
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base:    api_base.into(),
            api_key:     api_key.into(),
            domain:      domain.into(),
        }
    }
}

#[async_trait]
impl MailSender for MailgunMailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SendResponse, NotificationError> {
        let url = format!("{}/v3/{}/messages", self.api_base, self.domain);

        let mut form: Vec<(&str, String)> = vec![("from", email.from_mailbox())];
        for to in &email.to {
            form.push(("to", to.clone()));
        }
        form.push(("subject", email.subject.clone()));
        form.push(("html", email.html_body.clone()));

        let response = self
            .http_client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Mailgun 요청 실패: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::SendFailed(format!(
                "Mailgun 응답 오류: {status} {body}"
            )));
        }

        response
            .json::<SendResponse>()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Mailgun 응답 파싱 실패: {e}")))
    }
}
