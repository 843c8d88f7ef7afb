//! # Moing 메일러
//!
//! 이름 붙은 템플릿으로 HTML 메일 본문을 렌더링하고, 트랜잭셔널 메일
//! 제공자를 통해 발송하는 라이브러리.
//!
//! ## 역할
//!
//! 메시지 기술([`EmailNotification`]) 하나를 받아 단선형 흐름으로 처리한다:
//!
//! ```text
//! 렌더링 → HTML 래핑 → 발신 메일 조립 → 발송 → 로그
//! ```
//!
//! CLI 도 네트워크 리스너도 없다. 다른 애플리케이션 코드가 호출하는 발신
//! 전용 래퍼다. 병렬 발송·재시도·타임아웃은 호출 측의 책임이다.
//!
//! ## 환경 변수
//!
//! | 변수명 | 필수 | 설명 |
//! |--------|------|------|
//! | `MAIL_BACKEND` | No | 발송 백엔드 `mailgun` \| `smtp` \| `noop` (기본: `noop`) |
//! | `MAILGUN_API_KEY` | backend=mailgun 일 때 | Mailgun API 키 |
//! | `MAILGUN_API_BASE` | No | Mailgun API 베이스 URL (기본: `https://api.mailgun.net`) |
//! | `SMTP_HOST` | No | SMTP 호스트 (기본: `localhost`) |
//! | `SMTP_PORT` | No | SMTP 포트 (기본: `1025`, Mailpit) |
//!
//! ## 사용 예
//!
//! ```rust,ignore
//! use moing_domain::email::EmailNotification;
//! use moing_mailer::EmailSenderProcessor;
//!
//! async fn send_verification(email: String, code: String) -> anyhow::Result<()> {
//!     let processor = EmailSenderProcessor::from_env()?;
//!     processor
//!         .process(&EmailNotification::VerificationCode {
//!             email,
//!             verification_code: code,
//!             main_text: "이메일 인증".to_string(),
//!             description: "아래 코드를 입력해주세요.".to_string(),
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! [`EmailNotification`]: moing_domain::email::EmailNotification

pub mod config;
pub mod processor;
pub mod template_renderer;

pub use config::{MailerConfig, build_sender};
pub use processor::EmailSenderProcessor;
pub use template_renderer::TemplateRenderer;
