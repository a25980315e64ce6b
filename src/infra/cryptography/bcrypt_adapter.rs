//! bcrypt 어댑터
//!
//! bcrypt 크레이트를 [`Hasher`] / [`HashComparer`] 계약에 맞게 감쌉니다.

use crate::data::protocols::{HashComparer, Hasher};
use crate::errors::{AppError, AppResult};

/// bcrypt 기반 비밀번호 해싱 어댑터
pub struct BcryptAdapter {
    /// bcrypt cost 파라미터 (4~31)
    cost: u32,
}

impl BcryptAdapter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Hasher for BcryptAdapter {
    fn hash(&self, value: &str) -> AppResult<String> {
        bcrypt::hash(value, self.cost).map_err(|e| AppError::HashError(e.to_string()))
    }
}

impl HashComparer for BcryptAdapter {
    fn compare(&self, value: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(value, hash).map_err(|e| AppError::HashError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트는 최소 cost를 사용 (기본 cost 12는 너무 느림)
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_compare_round_trip() {
        let sut = BcryptAdapter::new(TEST_COST);

        let hash = sut.hash("any_password").unwrap();

        assert_ne!(hash, "any_password");
        assert!(sut.compare("any_password", &hash).unwrap());
        assert!(!sut.compare("other_password", &hash).unwrap());
    }

    #[test]
    fn test_compare_fails_on_malformed_hash() {
        let sut = BcryptAdapter::new(TEST_COST);

        let error = sut.compare("any_password", "not_a_bcrypt_hash").unwrap_err();

        assert!(matches!(error, AppError::HashError(_)));
    }
}
