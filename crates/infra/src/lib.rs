//! # Moing 메일 인프라 층
//!
//! 외부 메일 제공자와의 통신을 담당하는 인프라스트럭처 층.
//!
//! ## 설계 방침
//!
//! 이 크레이트는 도메인 층이 조립한 [`OutboundEmail`] 을 실제로 전달하는
//! 어댑터를 제공한다. 제공자의 세부 사항을 캡슐화해 도메인 층과 프로세서를
//! 제공자 교체로부터 보호한다.
//!
//! ## 책임
//!
//! - **제공자 어댑터**: Mailgun HTTP API(운영), SMTP(개발), Noop(비활성화)
//! - **발송 추상화**: [`MailSender`] trait 하나로 전 구현을 통일
//! - **테스트 지원**: `test-utils` feature 로 인메모리 모크 제공
//!
//! ## 의존 관계
//!
//! ```text
//! mailer → infra → domain
//! ```
//!
//! [`OutboundEmail`]: moing_domain::email::OutboundEmail

pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use notification::{MailSender, MailgunMailSender, NoopMailSender, SmtpMailSender};
