//! HTTP 응답 헬퍼
//!
//! 도메인 에러 또는 성공 페이로드를 상태 코드 + 본문 쌍으로 매핑하는
//! 순수 함수들입니다. 상태를 갖지 않으며, 에러 상세의 노출 범위를
//! 이 한 곳에서 통제합니다.
//!
//! | 헬퍼 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | `ok` | 200 | 성공 페이로드 |
//! | `created` | 201 | 생성된 리소스 |
//! | `bad_request` | 400 | `{ name, message }` (구체적 필드 명시) |
//! | `unauthorized` | 401 | 제네릭 AccessDenied |
//! | `forbidden` | 403 | `{ name, message }` |
//! | `internal_server_error` | 500 | 항상 동일한 제네릭 ServerError |

use serde_json::Value;

use crate::errors::AppError;
use crate::presentation::protocols::http::HttpResponse;

/// 200 OK 응답을 생성합니다.
pub fn ok(data: Value) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        body: data,
        stack: None,
    }
}

/// 201 Created 응답을 생성합니다.
pub fn created(data: Value) -> HttpResponse {
    HttpResponse {
        status_code: 201,
        body: data,
        stack: None,
    }
}

/// 400 Bad Request 응답을 생성합니다.
///
/// 검증 에러는 항상 위반된 필드를 명시한 구체적인 본문을 가집니다.
pub fn bad_request(error: &AppError) -> HttpResponse {
    HttpResponse {
        status_code: 400,
        body: error.to_body(),
        stack: None,
    }
}

/// 401 Unauthorized 응답을 생성합니다.
///
/// 어떤 자격 증명이 틀렸는지는 노출하지 않습니다.
pub fn unauthorized() -> HttpResponse {
    HttpResponse {
        status_code: 401,
        body: AppError::Unauthorized.to_body(),
        stack: None,
    }
}

/// 403 Forbidden 응답을 생성합니다.
pub fn forbidden(error: &AppError) -> HttpResponse {
    HttpResponse {
        status_code: 403,
        body: error.to_body(),
        stack: None,
    }
}

/// 500 Internal Server Error 응답을 생성합니다.
///
/// 본문은 원인과 무관하게 항상 동일한 제네릭 ServerError 형태입니다.
/// 원본 에러 상세는 `stack` 필드에 보존되어 로그 데코레이터가
/// 에러 컬렉션에 저장하며, 클라이언트에는 전송되지 않습니다.
pub fn internal_server_error(error: &AppError) -> HttpResponse {
    HttpResponse {
        status_code: 500,
        body: AppError::ServerError(String::new()).to_body(),
        stack: Some(error.detail()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_wraps_payload_with_200() {
        let response = ok(json!({ "accessToken": "any_token" }));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body["accessToken"], "any_token");
        assert!(response.stack.is_none());
    }

    #[test]
    fn test_created_wraps_payload_with_201() {
        let response = created(json!({ "id": "any_id" }));

        assert_eq!(response.status_code, 201);
        assert_eq!(response.body["id"], "any_id");
    }

    #[test]
    fn test_bad_request_carries_named_field_error() {
        let response = bad_request(&AppError::MissingParam("name".to_string()));

        assert_eq!(response.status_code, 400);
        assert_eq!(response.body["name"], "MissingParamError");
        assert_eq!(response.body["message"], "Missing param: name");
    }

    #[test]
    fn test_unauthorized_is_generic() {
        let response = unauthorized();

        assert_eq!(response.status_code, 401);
        assert_eq!(response.body["name"], "AccessDeniedError");
    }

    #[test]
    fn test_forbidden_carries_error_body() {
        let response = forbidden(&AppError::EmailInUse);

        assert_eq!(response.status_code, 403);
        assert_eq!(response.body["name"], "EmailInUseError");
    }

    #[test]
    fn test_internal_server_error_never_leaks_detail() {
        let error = AppError::DatabaseError("accounts collection unreachable".to_string());
        let response = internal_server_error(&error);

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body["name"], "ServerError");
        assert_eq!(response.body["message"], "Internal server error");
        assert!(!response.body.to_string().contains("unreachable"));
        assert!(response.stack.unwrap().contains("accounts collection unreachable"));
    }
}
