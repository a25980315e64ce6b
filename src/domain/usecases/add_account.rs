//! 계정 생성 유스케이스 계약
//!
//! 회원가입 컨트롤러가 소비하는 계정 생성 능력을 정의합니다.
//! 구현체는 데이터 계층의 `DbAddAccount`입니다.

use async_trait::async_trait;

use crate::domain::models::account::Account;
use crate::errors::AppResult;

/// 계정 생성에 필요한 입력값
///
/// 검증이 끝난 필드의 부분집합입니다. `password`는 평문이며,
/// 해싱은 유스케이스 구현체의 책임입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AddAccountParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// 계정 생성 유스케이스
///
/// 컨트롤러는 이 trait을 통해서만 계정 생성에 접근하며,
/// 구현체가 실패를 반환하더라도 컨트롤러 경계에서 HTTP 응답으로 변환됩니다.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// 새 계정을 생성하고 생성된 계정을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 생성된 계정
    /// * `Err(AppError::EmailInUse)` - 이미 등록된 이메일
    /// * `Err(AppError)` - 해싱 또는 저장소 오류
    async fn add(&self, params: AddAccountParams) -> AppResult<Account>;
}
