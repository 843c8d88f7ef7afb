//! # 발송 프로세서
//!
//! 템플릿 렌더링 → HTML 래핑 → 발신 메일 조립 → 발송 → 로그를 통합하는
//! 프로세서.
//!
//! ## 설계 방침
//!
//! - **catch-log-rethrow**: 렌더링·발송 어느 단계에서 실패하든 에러 로그를
//!   정확히 한 번 남기고 원본 에러를 그대로 호출자에게 전파한다. 재시도와
//!   실패 격납은 호출 측의 책임이다
//! - **단발 동기 호출**: 호출 한 번이 발송 한 번. 내부 동시성·큐·상태가
//!   없다
//! - **의존성 주입**: 발송 백엔드는 [`MailSender`] trait 로 추상화

use std::sync::Arc;

use moing_domain::email::{
    EmailNotification,
    FROM_EMAIL,
    FROM_NAME,
    HTML_FOOTER,
    HTML_HEADER,
    NotificationError,
    OutboundEmail,
    SendResponse,
    TITLE_PREFIX,
};
use moing_infra::MailSender;

use crate::{
    config::{MailerConfig, build_sender},
    template_renderer::TemplateRenderer,
};

/// 발송 프로세서
///
/// 알림 메시지 하나를 전달 완료된 메일로 바꾼다.
pub struct EmailSenderProcessor {
    renderer: TemplateRenderer,
    sender:   Arc<dyn MailSender>,
}

impl EmailSenderProcessor {
    pub fn new(renderer: TemplateRenderer, sender: Arc<dyn MailSender>) -> Self {
        Self { renderer, sender }
    }

    /// 환경 변수 설정으로 프로세서를 구성한다
    ///
    /// [`MailerConfig::from_env`] 가 선택한 백엔드와 내장 템플릿으로
    /// 배선한다.
    pub fn from_env() -> Result<Self, NotificationError> {
        let config = MailerConfig::from_env();
        Ok(Self::new(TemplateRenderer::new()?, build_sender(&config)))
    }

    /// 알림 메시지 하나를 처리한다
    ///
    /// 성공 시 수신자 주소와 제공자 응답문을 info 로그로 남기고 접수 응답을
    /// 돌려준다. 실패 시(렌더링·발송 불문) 수신자 주소와 에러문을 error
    /// 로그로 남긴 뒤 같은 에러를 전파한다.
    pub async fn process(
        &self,
        message: &EmailNotification,
    ) -> Result<SendResponse, NotificationError> {
        match self.render_and_send(message).await {
            Ok(response) => {
                tracing::info!(
                    email = %message.email(),
                    response = %response.message,
                    "메일을 발송했습니다"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::error!(
                    email = %message.email(),
                    error = %e,
                    "메일 발송에 실패했습니다"
                );
                Err(e)
            }
        }
    }

    /// 렌더링에서 발송까지의 본 처리
    async fn render_and_send(
        &self,
        message: &EmailNotification,
    ) -> Result<SendResponse, NotificationError> {
        let body = self
            .renderer
            .render(message.template(), &message.variables())?;

        let html_body = format!("{HTML_HEADER}{body}{HTML_FOOTER}")
            .trim()
            .to_string();

        let email = OutboundEmail {
            from_name: FROM_NAME.to_string(),
            from_address: FROM_EMAIL.to_string(),
            to: message.recipients(),
            subject: format!("{TITLE_PREFIX} {}", message.title()),
            html_body,
        };

        self.sender.send(&email).await
    }
}
