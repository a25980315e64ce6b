//! 로그인 인증 유스케이스 구현

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::protocols::{
    Encrypter, HashComparer, LoadAccountByEmailRepository, UpdateAccessTokenRepository,
};
use crate::domain::usecases::authentication::{Authentication, AuthenticationParams};
use crate::errors::{AppError, AppResult};

/// 데이터베이스 기반 로그인 인증 유스케이스
///
/// 처리 순서:
/// 1. 이메일로 계정 조회 (없으면 `Unauthorized`)
/// 2. 비밀번호 해시 비교 (불일치 시 `Unauthorized`)
/// 3. 액세스 토큰 발급 및 계정에 기록
///
/// 계정 없음과 비밀번호 불일치는 동일한 `Unauthorized`로 귀결되어
/// 어느 쪽이 틀렸는지 외부에서 구분할 수 없습니다.
pub struct DbAuthentication {
    load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
    hash_comparer: Box<dyn HashComparer>,
    encrypter: Box<dyn Encrypter>,
    update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
}

impl DbAuthentication {
    pub fn new(
        load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
        hash_comparer: Box<dyn HashComparer>,
        encrypter: Box<dyn Encrypter>,
        update_access_token_repository: Arc<dyn UpdateAccessTokenRepository>,
    ) -> Self {
        Self {
            load_account_by_email_repository,
            hash_comparer,
            encrypter,
            update_access_token_repository,
        }
    }
}

#[async_trait]
impl Authentication for DbAuthentication {
    async fn auth(&self, params: AuthenticationParams) -> AppResult<String> {
        let account = self
            .load_account_by_email_repository
            .load_by_email(&params.email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !self.hash_comparer.compare(&params.password, &account.password)? {
            return Err(AppError::Unauthorized);
        }

        let access_token = self.encrypter.encrypt(&account.id)?;

        self.update_access_token_repository
            .update_access_token(&account.id, &access_token)
            .await?;

        Ok(access_token)
    }
}
