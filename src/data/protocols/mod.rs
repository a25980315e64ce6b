//! 데이터 계층 프로토콜
//!
//! 유스케이스 구현체가 의존하는 외부 능력의 계약들입니다.
//! 암호화/토큰 능력은 동기, 저장소 능력은 비동기입니다.

use async_trait::async_trait;

use crate::domain::models::account::Account;
use crate::domain::usecases::add_account::AddAccountParams;
use crate::errors::AppResult;

/// 비밀번호 해싱 능력
pub trait Hasher: Send + Sync {
    fn hash(&self, value: &str) -> AppResult<String>;
}

/// 평문과 해시의 일치 여부 비교 능력
pub trait HashComparer: Send + Sync {
    fn compare(&self, value: &str, hash: &str) -> AppResult<bool>;
}

/// 액세스 토큰 발급 능력
pub trait Encrypter: Send + Sync {
    fn encrypt(&self, value: &str) -> AppResult<String>;
}

/// 계정 저장 능력
///
/// `params.password`는 이미 해시된 값이어야 합니다.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, params: AddAccountParams) -> AppResult<Account>;
}

/// 이메일로 계정을 조회하는 능력
#[async_trait]
pub trait LoadAccountByEmailRepository: Send + Sync {
    async fn load_by_email(&self, email: &str) -> AppResult<Option<Account>>;
}

/// 발급된 액세스 토큰을 계정에 기록하는 능력
#[async_trait]
pub trait UpdateAccessTokenRepository: Send + Sync {
    async fn update_access_token(&self, id: &str, token: &str) -> AppResult<()>;
}

/// 에러 스택 문자열을 영구 저장하는 능력
///
/// 예상치 못한 500 응답의 내부 상세를 `errors` 컬렉션에 남기기 위해 사용됩니다.
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    async fn log_error(&self, stack: &str) -> AppResult<()>;
}
