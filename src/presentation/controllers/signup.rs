//! 회원가입 컨트롤러
//!
//! `POST /api/signup` 요청을 처리합니다. 검증 컴포지트로 입력을 검사하고,
//! 계정 생성 유스케이스를 호출한 뒤 결과를 HTTP 응답으로 매핑합니다.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::usecases::add_account::{AddAccount, AddAccountParams};
use crate::errors::AppError;
use crate::presentation::helpers::http_helpers::{
    bad_request, created, forbidden, internal_server_error,
};
use crate::presentation::protocols::{Controller, HttpRequest, HttpResponse, Validation};

/// 회원가입 요청 핸들러
///
/// 요청 본문에서 `name`, `email`, `password`, `passwordConfirmation`을
/// 기대합니다. 검증 통과 후에만, 정확히 한 번 유스케이스를 호출합니다.
///
/// | 결과 | 응답 |
/// |------|------|
/// | 검증 실패 | 400 (위반 필드를 명시한 에러) |
/// | 이메일 중복 | 403 |
/// | 유스케이스 성공 | 201 (생성된 계정) |
/// | 내부 오류 | 500 (제네릭 ServerError) |
pub struct SignUpController {
    validation: Box<dyn Validation>,
    add_account: Box<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(validation: Box<dyn Validation>, add_account: Box<dyn AddAccount>) -> Self {
        Self {
            validation,
            add_account,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        if let Err(error) = self.validation.validate(&request.body) {
            // 검사기 내부 오류는 검증 실패가 아니라 서버 오류로 취급
            if error.is_server_error() {
                return internal_server_error(&error);
            }
            return bad_request(&error);
        }

        let params = match extract_params(&request) {
            Ok(params) => params,
            Err(error) => return bad_request(&error),
        };

        match self.add_account.add(params).await {
            Ok(account) => created(json!(account)),
            Err(AppError::EmailInUse) => forbidden(&AppError::EmailInUse),
            Err(error) => internal_server_error(&error),
        }
    }
}

/// 검증이 끝난 본문에서 유스케이스 입력을 추출합니다.
///
/// `passwordConfirmation`은 검증에만 사용되며 유스케이스에는 전달되지 않습니다.
fn extract_params(request: &HttpRequest) -> Result<AddAccountParams, AppError> {
    Ok(AddAccountParams {
        name: request.body_str("name")?.to_string(),
        email: request.body_str("email")?.to_string(),
        password: request.body_str("password")?.to_string(),
    })
}
