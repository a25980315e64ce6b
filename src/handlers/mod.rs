//! # HTTP Handlers
//!
//! actix-web과 컨트롤러 계층을 연결하는 라우트 어댑터입니다.
//! 각 핸들러는 요청마다 팩토리로 컨트롤러 그래프를 조립하고,
//! JSON 본문을 프레임워크 독립적인 [`HttpRequest`]로 감싼 뒤
//! 컨트롤러의 응답을 actix 응답으로 변환합니다.
//!
//! 컨트롤러의 `handle`은 절대 실패하지 않으므로 핸들러에도
//! 에러 경로가 없습니다. 내부 전용 필드(`stack`)는 이 변환에서
//! 버려지며 클라이언트에 전송되지 않습니다.

use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse as ActixHttpResponse};
use serde_json::Value;

use crate::config::Settings;
use crate::db::Database;
use crate::factories::{make_login_controller, make_signup_controller};
use crate::presentation::protocols::{HttpRequest, HttpResponse};

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/signup`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "valid_name",
///   "email": "valid_email@email.com",
///   "password": "valid_password",
///   "passwordConfirmation": "valid_password"
/// }
/// ```
///
/// # 응답
///
/// * `201 Created` - 생성된 계정
/// * `400 Bad Request` - 검증 실패 (`{ name, message }`)
/// * `403 Forbidden` - 이메일 중복
/// * `500 Internal Server Error` - 제네릭 ServerError
#[post("/signup")]
pub async fn signup(
    db: web::Data<Database>,
    settings: web::Data<Settings>,
    payload: web::Json<Value>,
) -> ActixHttpResponse {
    let controller = make_signup_controller(db.get_ref(), settings.get_ref());
    let response = controller.handle(HttpRequest::new(payload.into_inner())).await;
    adapt(response)
}

/// 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /api/login`
///
/// # 요청 본문
///
/// ```json
/// { "email": "valid_email@email.com", "password": "valid_password" }
/// ```
///
/// # 응답
///
/// * `200 OK` - `{ "accessToken": ... }`
/// * `400 Bad Request` - 검증 실패
/// * `401 Unauthorized` - 자격 증명 불일치
/// * `500 Internal Server Error` - 제네릭 ServerError
#[post("/login")]
pub async fn login(
    db: web::Data<Database>,
    settings: web::Data<Settings>,
    payload: web::Json<Value>,
) -> ActixHttpResponse {
    let controller = make_login_controller(db.get_ref(), settings.get_ref());
    let response = controller.handle(HttpRequest::new(payload.into_inner())).await;
    adapt(response)
}

/// 컨트롤러 응답을 actix 응답으로 변환합니다.
fn adapt(response: HttpResponse) -> ActixHttpResponse {
    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ActixHttpResponse::build(status).json(response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adapt_preserves_status_and_body() {
        let response = HttpResponse {
            status_code: 201,
            body: json!({ "id": "any_id" }),
            stack: None,
        };

        let actix_response = adapt(response);

        assert_eq!(actix_response.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_adapt_drops_internal_stack() {
        let response = HttpResponse {
            status_code: 500,
            body: json!({ "name": "ServerError", "message": "Internal server error" }),
            stack: Some("secret internal detail".to_string()),
        };

        let actix_response = adapt(response);

        assert_eq!(actix_response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // 직렬화된 본문에 내부 상세가 포함되지 않는지 확인
        let bytes = actix_web::body::to_bytes(actix_response.into_body())
            .await
            .unwrap();
        let payload = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(payload.contains("Internal server error"));
        assert!(!payload.contains("secret internal detail"));
    }
}
