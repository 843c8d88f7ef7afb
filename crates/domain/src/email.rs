//! # 메일 알림
//!
//! 메일 한 통을 렌더링·발송하는 데 필요한 모든 것을 담는 도메인 모델을
//! 정의한다.
//!
//! ## 도메인 용어
//!
//! | 타입 | 도메인 용어 | 역할 |
//! |---|------------|------|
//! | [`EmailNotification`] | 알림 메시지 | 발송 가능한 알림의 데이터 계약 |
//! | [`EmailTemplate`] | 템플릿 식별자 | 렌더링할 HTML 템플릿 단편의 열거형 키 |
//! | [`OutboundEmail`] | 발신 메일 | 제공자에 넘기는 조립 완료 메일 |
//! | [`SendResponse`] | 발송 응답 | 제공자가 돌려주는 메시지 식별자·응답문 |
//!
//! ## 설계 방침
//!
//! - **enum 바리안트로 알림 종류를 표현**: 각 바리안트가 계약의 다섯 값
//!   (수신자 주소, 템플릿, 제목, 변수, 전달 목록)을 접근자 메서드로 공급
//! - **`email` 과 `recipients` 의 구분 유지**: `email()` 은 로그용 단일
//!   주소, `recipients()` 는 실제 전달 목록. 표본 바리안트에서는 일치하지만
//!   계약상 서로 다를 수 있다
//! - **불변 생성·단발 소비**: 메시지는 발송 직전에 생성되어 프로세서가
//!   소비한 뒤 폐기된다. 영속화하지 않는다

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::IntoStaticStr;
use thiserror::Error;

// ===== 공유 상수 =====

/// 발신자 표시 이름
pub const FROM_NAME: &str = "모잉";

/// 발신자 메일 주소
pub const FROM_EMAIL: &str = "noreply@moing.shop";

/// 제목 접두사. 프로세서가 `제목 접두사 + 공백 + title` 로 합성한다
pub const TITLE_PREFIX: &str = "[모잉]";

/// Mailgun 발송 도메인 (`/v3/{domain}/messages` 경로에 사용)
pub const SENDING_DOMAIN: &str = "moing.shop";

/// 렌더링된 본문 앞에 붙는 고정 HTML 헤더.
///
/// 메일 클라이언트 호환용 XHTML 테이블 레이아웃으로, 로고를 포함한 600px
/// 칼럼을 연다. 본문 템플릿은 이 칼럼의 `<tr>` 행으로 이어 붙는다.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html
PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
<title>Moing</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<table
    style="mso-table-lspace: 0pt; mso-table-rspace: 0pt; border-collapse: collapse; width: 100% !important; height: 100% !important; margin: 0; padding: 0; padding: 20px 0 30px 0; background-color: #ffffff;"
    border="0" cellpadding="0" cellspacing="0" width="100%" id="bodyTable">
    <tr>
        <td
    style="mso-table-lspace: 0pt; mso-table-rspace: 0pt; border-collapse: collapse; ms-text-size-adjust: 100%; -webkit-text-size-adjust: 100%;">
    <table
        style="border-collapse: collapse; -ms-text-size-adjust: 100%; mso-table-lspace: 0pt; mso-table-rspace: 0pt; webkit-text-size-adjust: 100%;"
        border="0" cellspacing="0" cellpadding="0" width="600">
        <tr>
            <td
                style="mso-table-lspace: 0pt; mso-table-rspace: 0pt; border-collapse: collapse; -ms-text-size-adjust: 100%; -webkit-text-size-adjust: 100%;">
                <img style="border: 0; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic;"
                    src="https://www.moing.shop/images/homeLogo.png" width="124" alt="Moing" />
            </td>
        </tr>
        <tr>
            <td
                style="mso-table-lspace: 0pt; mso-table-rspace: 0pt; border-collapse: collapse; -ms-text-size-adjust: 100%; -webkit-text-size-adjust: 100%;">
                <div style="height:20px;"></div>
            </td>
        </tr>
"#;

/// 렌더링된 본문 뒤에 붙는 고정 HTML 푸터. [`HTML_HEADER`] 가 연 테이블을
/// 닫는다
pub const HTML_FOOTER: &str = r#"</table>
</td>
</tr>
</table>
</html>"#;

// ===== 에러 =====

/// 알림 발송 에러
///
/// 렌더링 실패와 제공자 실패를 진단용으로만 구분한다. 처리 정책은 어느
/// 쪽이든 동일하다: 경계에서 한 번 에러 로그를 남기고 원본 에러를 그대로
/// 호출자에게 전파한다. 재시도·대체 수신자·부분 실패 처리는 없다.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// 템플릿 렌더링에 실패
    #[error("템플릿 렌더링에 실패했습니다: {0}")]
    TemplateFailed(String),

    /// 메일 발송에 실패
    #[error("메일 발송에 실패했습니다: {0}")]
    SendFailed(String),
}

// ===== 템플릿 식별자 =====

/// 템플릿 식별자
///
/// 렌더링할 HTML 템플릿 단편을 선택하는 닫힌 열거형. kebab-case 식별자
/// 문자열로 직렬화된다 (`EmailVerificationCode` → `"email-verification-code"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum EmailTemplate {
    /// 이메일 인증 코드 안내
    EmailVerificationCode,
}

impl EmailTemplate {
    /// 템플릿 식별자 문자열을 돌려준다
    pub fn identifier(&self) -> &'static str {
        (*self).into()
    }
}

// ===== 알림 메시지 =====

/// 알림 메시지
///
/// 각 바리안트가 메일 알림 한 종류에 대응하며, 계약의 다섯 값을 접근자
/// 메서드로 공급한다. 프로세서는 바리안트를 구별하지 않고 동일하게
/// 처리한다.
#[derive(Debug, Clone)]
pub enum EmailNotification {
    /// 인증 코드 메일: 이메일 인증 요청 시 → 해당 주소로 발송
    VerificationCode {
        email:             String,
        verification_code: String,
        main_text:         String,
        description:       String,
    },
}

impl EmailNotification {
    /// 수신자 주소를 돌려준다 (로그·표시용)
    ///
    /// 전달 목록은 [`recipients()`](Self::recipients) 가 별도로 공급한다.
    pub fn email(&self) -> &str {
        match self {
            Self::VerificationCode { email, .. } => email,
        }
    }

    /// 렌더링할 템플릿 식별자를 돌려준다
    pub fn template(&self) -> EmailTemplate {
        match self {
            Self::VerificationCode { .. } => EmailTemplate::EmailVerificationCode,
        }
    }

    /// 제목 본문을 돌려준다. 접두사 [`TITLE_PREFIX`] 는 프로세서가 붙인다
    pub fn title(&self) -> &str {
        match self {
            Self::VerificationCode { .. } => "이메일 인증을 진행해주세요",
        }
    }

    /// 전달 수신자 목록을 돌려준다 (순서 유지, 비어 있지 않음)
    pub fn recipients(&self) -> Vec<String> {
        match self {
            Self::VerificationCode { email, .. } => vec![email.clone()],
        }
    }

    /// 템플릿 엔진에 넘길 변수 매핑을 돌려준다
    pub fn variables(&self) -> Map<String, Value> {
        match self {
            Self::VerificationCode {
                email,
                verification_code,
                main_text,
                description,
            } => {
                let mut vars = Map::new();
                vars.insert("email".to_string(), Value::String(email.clone()));
                vars.insert(
                    "verificationCode".to_string(),
                    Value::String(verification_code.clone()),
                );
                vars.insert("mainText".to_string(), Value::String(main_text.clone()));
                vars.insert(
                    "description".to_string(),
                    Value::String(description.clone()),
                );
                vars
            }
        }
    }
}

// ===== 발신 메일 =====

/// 발신 메일
///
/// 프로세서가 조립해 `MailSender` 구현에 넘기는 와이어 수준의 메일.
/// 발신자는 이름과 주소를 분리해 보관하고, 제공자별 표기는 각 구현이
/// 결정한다.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    /// 발신자 표시 이름
    pub from_name:    String,
    /// 발신자 메일 주소
    pub from_address: String,
    /// 전달 수신자 목록 (메시지의 `recipients()` 그대로)
    pub to:           Vec<String>,
    /// 제목 (접두사 합성 완료)
    pub subject:      String,
    /// HTML 본문 (헤더 + 렌더링 본문 + 푸터, 앞뒤 공백 제거)
    pub html_body:    String,
}

impl OutboundEmail {
    /// `"이름 <주소>"` 형식의 발신자 표기를 돌려준다
    pub fn from_mailbox(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_address)
    }
}

/// 발송 응답
///
/// 제공자가 접수 시 돌려주는 메시지 식별자와 응답문. Mailgun 의
/// `{"id": ..., "message": ...}` 응답 본문과 대응한다.
#[derive(Debug, Clone, Deserialize)]
pub struct SendResponse {
    /// 제공자 측 메시지 식별자
    pub id:      String,
    /// 사람이 읽는 응답문 (예: `"Queued. Thank you."`)
    pub message: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn make_verification_code() -> EmailNotification {
        EmailNotification::VerificationCode {
            email:             "a@b.com".to_string(),
            verification_code: "123456".to_string(),
            main_text:         "Verify".to_string(),
            description:       "desc".to_string(),
        }
    }

    #[test]
    fn email_template_의_문자열_변환이_올바르다() {
        assert_eq!(
            EmailTemplate::EmailVerificationCode.to_string(),
            "email-verification-code"
        );
        assert_eq!(
            EmailTemplate::EmailVerificationCode.identifier(),
            "email-verification-code"
        );
        assert_eq!(
            EmailTemplate::from_str("email-verification-code").unwrap(),
            EmailTemplate::EmailVerificationCode
        );
    }

    #[test]
    fn 인증_코드_메시지가_고정_제목을_공급한다() {
        assert_eq!(make_verification_code().title(), "이메일 인증을 진행해주세요");
    }

    #[test]
    fn 인증_코드_메시지의_전달_목록은_email_하나다() {
        let message = make_verification_code();

        assert_eq!(message.email(), "a@b.com");
        assert_eq!(message.recipients(), vec!["a@b.com".to_string()]);
    }

    #[test]
    fn 인증_코드_메시지가_네_개의_변수를_공급한다() {
        let vars = make_verification_code().variables();

        assert_eq!(vars.len(), 4);
        assert_eq!(vars["email"], Value::String("a@b.com".to_string()));
        assert_eq!(vars["verificationCode"], Value::String("123456".to_string()));
        assert_eq!(vars["mainText"], Value::String("Verify".to_string()));
        assert_eq!(vars["description"], Value::String("desc".to_string()));
    }

    #[test]
    fn from_mailbox_가_이름과_주소를_합성한다() {
        let email = OutboundEmail {
            from_name:    FROM_NAME.to_string(),
            from_address: FROM_EMAIL.to_string(),
            to:           vec!["a@b.com".to_string()],
            subject:      "제목".to_string(),
            html_body:    String::new(),
        };

        assert_eq!(email.from_mailbox(), "모잉 <noreply@moing.shop>");
    }

    #[test]
    fn html_래퍼_상수가_문서를_여닫는다() {
        assert!(HTML_HEADER.starts_with("<!DOCTYPE html"));
        assert!(HTML_HEADER.contains("homeLogo.png"));
        assert!(HTML_FOOTER.ends_with("</html>"));
    }

    #[test]
    fn 발송_응답을_mailgun_본문에서_역직렬화한다() {
        let response: SendResponse = serde_json::from_str(
            r#"{"id": "<20240101.1@moing.shop>", "message": "Queued. Thank you."}"#,
        )
        .unwrap();

        assert_eq!(response.id, "<20240101.1@moing.shop>");
        assert_eq!(response.message, "Queued. Thank you.");
    }
}
