//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror` 크레이트를 사용하여 에러 타입을 정의하고,
//! 프레젠테이션 계층의 HTTP 헬퍼가 각 에러를 상태 코드로 매핑합니다.
//!
//! ## 에러 카테고리
//!
//! ### 1. 클라이언트 에러 (400번대)
//! - `MissingParam`: 필수 필드 누락 (400)
//! - `InvalidParam`: 형식 오류 또는 필드 간 불일치 (400)
//! - `Unauthorized`: 인증 실패 (401)
//! - `EmailInUse`: 이미 사용 중인 이메일 (403)
//!
//! ### 2. 서버 에러 (500번대)
//! - `ServerError`: 예상치 못한 내부 오류 (500)
//! - `DatabaseError`: MongoDB 연산 오류 (500)
//! - `HashError`: 비밀번호 해싱 오류 (500)
//! - `TokenError`: JWT 발급 오류 (500)
//!
//! ## 전파 정책
//!
//! 검증 에러는 컨트롤러 내부에서 생성되어 즉시 400 응답으로 변환됩니다.
//! 내부 에러는 컨트롤러 경계에서 제네릭 `ServerError` 형태로 다운그레이드되며,
//! 원본 상세 정보는 클라이언트에 노출되지 않고 에러 로그 리포지토리에 저장됩니다.

use serde_json::{json, Value};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 컨트롤러와 유스케이스 계층에서 발생할 수 있는 모든 에러를 포괄하는 열거형입니다.
/// `Display` 구현은 클라이언트에게 보여줄 수 있는 메시지만 생성하며,
/// 내부 상세 정보는 [`AppError::detail`]을 통해 별도로 추출합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 필수 필드 누락 에러
    ///
    /// 클라이언트가 요청 본문에 필수 필드를 포함하지 않은 경우 발생합니다.
    /// 400 Bad Request로 응답됩니다.
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 잘못된 필드 에러
    ///
    /// 필드 값의 형식이 잘못되었거나(예: 이메일 형식 오류),
    /// 필드 간 일관성이 깨진 경우(예: 비밀번호 확인 불일치) 발생합니다.
    /// 400 Bad Request로 응답됩니다.
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// 인증 실패 에러
    ///
    /// 로그인 정보가 일치하지 않는 경우 발생합니다.
    /// 401 Unauthorized로 응답되며, 어떤 필드가 틀렸는지는 노출하지 않습니다.
    #[error("Access denied")]
    Unauthorized,

    /// 이메일 중복 에러
    ///
    /// 이미 등록된 이메일로 회원가입을 시도한 경우 발생합니다.
    /// 403 Forbidden으로 응답됩니다.
    #[error("The received email is already in use")]
    EmailInUse,

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류를 나타냅니다. 내부 상세 정보는
    /// `Display`에 포함되지 않으며 에러 로그 컬렉션에만 기록됩니다.
    #[error("Internal server error")]
    ServerError(String),

    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 해싱 에러
    #[error("Hash error: {0}")]
    HashError(String),

    /// JWT 토큰 발급 에러
    #[error("Token error: {0}")]
    TokenError(String),
}

impl AppError {
    /// 에러 이름을 반환합니다.
    ///
    /// 400/403 응답 본문의 `name` 필드에 사용됩니다.
    /// 내부 에러들은 모두 `ServerError`라는 단일 이름으로 통일되어
    /// 클라이언트가 내부 구조를 유추할 수 없도록 합니다.
    pub fn name(&self) -> &'static str {
        match self {
            AppError::MissingParam(_) => "MissingParamError",
            AppError::InvalidParam(_) => "InvalidParamError",
            AppError::Unauthorized => "AccessDeniedError",
            AppError::EmailInUse => "EmailInUseError",
            AppError::ServerError(_)
            | AppError::DatabaseError(_)
            | AppError::HashError(_)
            | AppError::TokenError(_) => "ServerError",
        }
    }

    /// 내부 상세 정보를 반환합니다.
    ///
    /// 에러 로그 리포지토리에 저장할 문자열입니다.
    /// 클라이언트 응답 본문에는 절대 포함되지 않습니다.
    pub fn detail(&self) -> String {
        match self {
            AppError::ServerError(detail)
            | AppError::DatabaseError(detail)
            | AppError::HashError(detail)
            | AppError::TokenError(detail) => format!("{}: {}", self.name_internal(), detail),
            other => other.to_string(),
        }
    }

    /// 에러 응답 본문을 생성합니다.
    ///
    /// 모든 에러 응답은 `{ "name": ..., "message": ... }` 형태를 따릅니다.
    pub fn to_body(&self) -> Value {
        json!({
            "name": self.name(),
            "message": self.to_string(),
        })
    }

    /// 서버 에러인지 확인합니다 (500 응답 대상).
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::ServerError(_)
                | AppError::DatabaseError(_)
                | AppError::HashError(_)
                | AppError::TokenError(_)
        )
    }

    /// 로그용 내부 에러 이름 (클라이언트에는 노출되지 않음)
    fn name_internal(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::HashError(_) => "HashError",
            AppError::TokenError(_) => "TokenError",
            _ => "ServerError",
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_param_message_names_field() {
        let error = AppError::MissingParam("email".to_string());

        assert_eq!(error.to_string(), "Missing param: email");
        assert_eq!(error.name(), "MissingParamError");
    }

    #[test]
    fn test_invalid_param_body_shape() {
        let error = AppError::InvalidParam("passwordConfirmation".to_string());
        let body = error.to_body();

        assert_eq!(body["name"], "InvalidParamError");
        assert_eq!(body["message"], "Invalid param: passwordConfirmation");
    }

    #[test]
    fn test_server_error_hides_detail() {
        let error = AppError::ServerError("mongo timeout at accounts".to_string());

        assert_eq!(error.to_string(), "Internal server error");
        assert!(error.detail().contains("mongo timeout at accounts"));
    }

    #[test]
    fn test_internal_variants_share_public_name() {
        let database = AppError::DatabaseError("connection refused".to_string());
        let hash = AppError::HashError("invalid cost".to_string());
        let token = AppError::TokenError("bad secret".to_string());

        assert_eq!(database.name(), "ServerError");
        assert_eq!(hash.name(), "ServerError");
        assert_eq!(token.name(), "ServerError");
        assert!(database.is_server_error());
    }

    #[test]
    fn test_validation_errors_are_not_server_errors() {
        assert!(!AppError::MissingParam("name".to_string()).is_server_error());
        assert!(!AppError::Unauthorized.is_server_error());
        assert!(!AppError::EmailInUse.is_server_error());
    }
}
