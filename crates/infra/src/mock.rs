//! # 테스트용 모크 발송기
//!
//! 프로세서 테스트에서 사용하는 인메모리 모크. `test-utils` feature 를
//! 활성화하면 다른 크레이트에서도 이용할 수 있다.
//!
//! ```toml
//! [dev-dependencies]
//! moing-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use moing_domain::email::{NotificationError, OutboundEmail, SendResponse};

use crate::notification::MailSender;

// ===== MockMailSender =====

/// 테스트용 모크 MailSender
///
/// 발송된 [`OutboundEmail`] 을 순서대로 기록한다. [`fail_with`](Self::fail_with)
/// 로 실패 메시지를 지정하면 이후의 `send` 는 해당 메시지의
/// [`NotificationError::SendFailed`] 를 돌려준다.
#[derive(Clone, Default)]
pub struct MockMailSender {
    sent:    Arc<Mutex<Vec<OutboundEmail>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockMailSender {
    pub fn new() -> Self {
        Self {
            sent:    Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// 이후의 `send` 를 지정한 메시지로 실패시킨다
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// 지금까지 기록된 발신 메일을 돌려준다
    pub fn sent_emails(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for MockMailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SendResponse, NotificationError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(NotificationError::SendFailed(message));
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        Ok(SendResponse {
            id:      format!("mock-{}", sent.len()),
            message: "Queued. Thank you.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_email(subject: &str) -> OutboundEmail {
        OutboundEmail {
            from_name:    "모잉".to_string(),
            from_address: "noreply@moing.shop".to_string(),
            to:           vec!["a@b.com".to_string()],
            subject:      subject.to_string(),
            html_body:    "<p>본문</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn 발송_순서대로_기록한다() {
        let sender = MockMailSender::new();

        sender.send(&make_email("첫 번째")).await.unwrap();
        sender.send(&make_email("두 번째")).await.unwrap();

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].subject, "첫 번째");
        assert_eq!(sent[1].subject, "두 번째");
    }

    #[tokio::test]
    async fn 응답_식별자가_발송_횟수를_따른다() {
        let sender = MockMailSender::new();

        let first = sender.send(&make_email("제목")).await.unwrap();
        let second = sender.send(&make_email("제목")).await.unwrap();

        assert_eq!(first.id, "mock-1");
        assert_eq!(second.id, "mock-2");
    }

    #[tokio::test]
    async fn fail_with_지정_후에는_send_가_실패한다() {
        let sender = MockMailSender::new();
        sender.fail_with("quota exceeded");

        let error = sender.send(&make_email("제목")).await.unwrap_err();

        assert!(matches!(error, NotificationError::SendFailed(message) if message == "quota exceeded"));
        assert!(sender.sent_emails().is_empty());
    }
}
