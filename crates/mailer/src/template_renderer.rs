//! # 템플릿 렌더러
//!
//! tera 템플릿 엔진으로 메일 본문 단편을 HTML 로 생성한다.
//!
//! ## 설계 방침
//!
//! - **`include_str!` 에 의한 컴파일 시점 포함**: 템플릿은 바이너리에
//!   포함되어 기동 시 한 번 등록된다 (런타임 파일 해석·캐시 갱신 없음)
//! - **식별자 기반 조회**: [`EmailTemplate`] 의 kebab-case 식별자가 그대로
//!   tera 의 템플릿 이름이 된다
//! - **고정 한국어 로케일**: 로케일 의존 문자열은 전부 한국어 템플릿 안에
//!   있으므로 런타임 로케일 인자는 존재하지 않는다

use moing_domain::email::{EmailTemplate, NotificationError};
use serde_json::{Map, Value};
use tera::{Context, Tera};

/// 템플릿 렌더러
///
/// tera 템플릿 엔진을 감싸, 템플릿 식별자와 변수 매핑에서 HTML 본문 단편을
/// 생성한다.
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 새 렌더러 인스턴스를 생성한다
    ///
    /// `include_str!` 로 포함한 템플릿을 tera 에 등록한다.
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![(
                EmailTemplate::EmailVerificationCode.identifier(),
                include_str!("../templates/email-verification-code.html"),
            )])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 식별자가 가리키는 템플릿을 변수 매핑으로 렌더링한다
    pub fn render(
        &self,
        template: EmailTemplate,
        variables: &Map<String, Value>,
    ) -> Result<String, NotificationError> {
        let context = Context::from_serialize(variables)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        self.engine
            .render(template.identifier(), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use moing_domain::email::EmailNotification;

    use super::*;

    fn make_variables() -> Map<String, Value> {
        EmailNotification::VerificationCode {
            email:             "a@b.com".to_string(),
            verification_code: "123456".to_string(),
            main_text:         "Verify".to_string(),
            description:       "desc".to_string(),
        }
        .variables()
    }

    #[test]
    fn new_가_정상_초기화된다() {
        let renderer = TemplateRenderer::new();
        assert!(renderer.is_ok());
    }

    #[test]
    fn 인증_코드_템플릿이_네_변수를_모두_출력한다() {
        let renderer = TemplateRenderer::new().unwrap();

        let body = renderer
            .render(EmailTemplate::EmailVerificationCode, &make_variables())
            .unwrap();

        assert!(body.contains("123456"));
        assert!(body.contains("Verify"));
        assert!(body.contains("desc"));
        assert!(body.contains("a@b.com"));
    }

    #[test]
    fn 변수가_빠지면_template_failed_를_돌려준다() {
        let renderer = TemplateRenderer::new().unwrap();

        let error = renderer
            .render(EmailTemplate::EmailVerificationCode, &Map::new())
            .unwrap_err();

        assert!(matches!(error, NotificationError::TemplateFailed(_)));
    }
}
