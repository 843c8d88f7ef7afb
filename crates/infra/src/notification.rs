//! # 메일 발송
//!
//! 메일 전달을 담당하는 인프라스트럭처 모듈.
//!
//! ## 설계 방침
//!
//! - **trait 에 의한 추상화**: [`MailSender`] trait 로 메일 전달을 추상화
//! - **3 개의 구현**: Mailgun(운영), SMTP(Mailpit 개발용), Noop(비활성화·테스트용)
//! - **환경 변수 전환**: `MAIL_BACKEND` 로 런타임 선택 (mailer 크레이트의
//!   설정 층이 담당)

mod mailgun;
mod noop;
mod smtp;

use async_trait::async_trait;
pub use mailgun::MailgunMailSender;
use moing_domain::email::{NotificationError, OutboundEmail, SendResponse};
pub use noop::NoopMailSender;
pub use smtp::SmtpMailSender;

/// 메일 발송 트레이트
///
/// 발송 기반의 중핵. 메일 전달의 구체적인 방법을 추상화한다.
/// Mailgun / SMTP / Noop 의 3 구현을 환경 변수로 전환한다.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// 메일을 발송하고 제공자의 접수 응답을 돌려준다
    async fn send(&self, email: &OutboundEmail) -> Result<SendResponse, NotificationError>;
}
