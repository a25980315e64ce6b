//! 로그인 컨트롤러
//!
//! `POST /api/login` 요청을 처리합니다.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::usecases::authentication::{Authentication, AuthenticationParams};
use crate::errors::AppError;
use crate::presentation::helpers::http_helpers::{
    bad_request, internal_server_error, ok, unauthorized,
};
use crate::presentation::protocols::{Controller, HttpRequest, HttpResponse, Validation};

/// 로그인 요청 핸들러
///
/// 요청 본문에서 `email`, `password`를 기대합니다.
///
/// | 결과 | 응답 |
/// |------|------|
/// | 검증 실패 | 400 |
/// | 자격 증명 불일치 | 401 |
/// | 인증 성공 | 200 `{ "accessToken": ... }` |
/// | 내부 오류 | 500 (제네릭 ServerError) |
pub struct LoginController {
    validation: Box<dyn Validation>,
    authentication: Box<dyn Authentication>,
}

impl LoginController {
    pub fn new(validation: Box<dyn Validation>, authentication: Box<dyn Authentication>) -> Self {
        Self {
            validation,
            authentication,
        }
    }
}

#[async_trait]
impl Controller for LoginController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        if let Err(error) = self.validation.validate(&request.body) {
            if error.is_server_error() {
                return internal_server_error(&error);
            }
            return bad_request(&error);
        }

        let params = match extract_params(&request) {
            Ok(params) => params,
            Err(error) => return bad_request(&error),
        };

        match self.authentication.auth(params).await {
            Ok(access_token) => ok(json!({ "accessToken": access_token })),
            Err(AppError::Unauthorized) => unauthorized(),
            Err(error) => internal_server_error(&error),
        }
    }
}

fn extract_params(request: &HttpRequest) -> Result<AuthenticationParams, AppError> {
    Ok(AuthenticationParams {
        email: request.body_str("email")?.to_string(),
        password: request.body_str("password")?.to_string(),
    })
}
