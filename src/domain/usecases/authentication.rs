//! 로그인 인증 유스케이스 계약

use async_trait::async_trait;

use crate::errors::AppResult;

/// 로그인에 필요한 입력값
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationParams {
    pub email: String,
    pub password: String,
}

/// 로그인 인증 유스케이스
///
/// 이메일/비밀번호를 검증하고 액세스 토큰을 발급합니다.
#[async_trait]
pub trait Authentication: Send + Sync {
    /// 자격 증명을 검증하고 액세스 토큰을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 발급된 액세스 토큰
    /// * `Err(AppError::Unauthorized)` - 이메일 또는 비밀번호 불일치
    /// * `Err(AppError)` - 저장소 또는 토큰 발급 오류
    async fn auth(&self, params: AuthenticationParams) -> AppResult<String>;
}
