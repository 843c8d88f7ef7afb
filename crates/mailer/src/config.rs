//! # 메일러 설정
//!
//! 환경 변수에서 발송 백엔드 설정을 읽는다.

use std::{env, sync::Arc};

use moing_domain::email::SENDING_DOMAIN;
use moing_infra::{MailSender, MailgunMailSender, NoopMailSender, SmtpMailSender};

/// 메일 발송 설정
///
/// `MAIL_BACKEND` 환경 변수로 발송 백엔드를 전환한다:
/// - `mailgun`: Mailgun Messages API 로 발송 (운영)
/// - `smtp`: Mailpit(개발) / SMTP 서버 경유로 발송
/// - `noop`: 발송하지 않음 (로그 출력만)
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// 발송 백엔드 (`"mailgun"` | `"smtp"` | `"noop"`)
    pub backend:          String,
    /// Mailgun API 키 (backend=mailgun 인 경우에 사용)
    pub mailgun_api_key:  String,
    /// Mailgun API 베이스 URL (테스트에서 스텁 서버로 교체 가능)
    pub mailgun_api_base: String,
    /// SMTP 호스트 (backend=smtp 인 경우에 사용)
    pub smtp_host:        String,
    /// SMTP 포트 (backend=smtp 인 경우에 사용)
    pub smtp_port:        u16,
}

impl MailerConfig {
    /// 환경 변수에서 설정을 읽는다
    pub fn from_env() -> Self {
        Self {
            backend:          env::var("MAIL_BACKEND").unwrap_or_else(|_| "noop".to_string()),
            mailgun_api_key:  env::var("MAILGUN_API_KEY").unwrap_or_default(),
            mailgun_api_base: env::var("MAILGUN_API_BASE")
                .unwrap_or_else(|_| "https://api.mailgun.net".to_string()),
            smtp_host:        env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port:        env::var("SMTP_PORT")
                .unwrap_or_else(|_| "1025".to_string())
                .parse()
                .expect("SMTP_PORT 는 유효한 포트 번호여야 합니다"),
        }
    }
}

/// 설정에 따라 발송 백엔드를 구성한다
///
/// 기동 시점의 배선 함수로, 설정이 잘못된 경우(알 수 없는 백엔드명,
/// Mailgun 키 누락)에는 panic 한다.
pub fn build_sender(config: &MailerConfig) -> Arc<dyn MailSender> {
    match config.backend.as_str() {
        "mailgun" => {
            assert!(
                !config.mailgun_api_key.is_empty(),
                "MAILGUN_API_KEY 가 설정되지 않았습니다"
            );
            Arc::new(MailgunMailSender::new(
                config.mailgun_api_base.clone(),
                config.mailgun_api_key.clone(),
                SENDING_DOMAIN,
            ))
        }
        "smtp" => Arc::new(SmtpMailSender::new(&config.smtp_host, config.smtp_port)),
        "noop" => Arc::new(NoopMailSender),
        other => panic!("알 수 없는 MAIL_BACKEND: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(backend: &str) -> MailerConfig {
        MailerConfig {
            backend:          backend.to_string(),
            mailgun_api_key:  "test-api-key".to_string(),
            mailgun_api_base: "https://api.mailgun.net".to_string(),
            smtp_host:        "localhost".to_string(),
            smtp_port:        1025,
        }
    }

    #[test]
    fn 세_가지_백엔드를_구성할_수_있다() {
        build_sender(&make_config("mailgun"));
        build_sender(&make_config("smtp"));
        build_sender(&make_config("noop"));
    }

    #[test]
    #[should_panic(expected = "알 수 없는 MAIL_BACKEND")]
    fn 알_수_없는_백엔드명은_panic_한다() {
        build_sender(&make_config("carrier-pigeon"));
    }

    #[test]
    #[should_panic(expected = "MAILGUN_API_KEY")]
    fn mailgun_백엔드에_키가_없으면_panic_한다() {
        let mut config = make_config("mailgun");
        config.mailgun_api_key = String::new();
        build_sender(&config);
    }
}
