//! JWT 어댑터
//!
//! jsonwebtoken 크레이트를 [`Encrypter`] 계약에 맞게 감쌉니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::data::protocols::Encrypter;
use crate::errors::{AppError, AppResult};

/// 액세스 토큰 유효 기간 (초)
const ACCESS_TOKEN_TTL_SECONDS: i64 = 3600;

/// JWT 클레임
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// 계정 ID
    pub sub: String,
    /// 발급 시각 (unix timestamp)
    pub iat: i64,
    /// 만료 시각 (unix timestamp)
    pub exp: i64,
}

/// HS256 기반 액세스 토큰 발급 어댑터
pub struct JwtAdapter {
    secret: String,
}

impl JwtAdapter {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Encrypter for JwtAdapter {
    fn encrypt(&self, value: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: value.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ACCESS_TOKEN_TTL_SECONDS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::TokenError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    #[test]
    fn test_issued_token_carries_account_id() {
        let sut = JwtAdapter::new("test_secret");

        let token = sut.encrypt("any_account_id").unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test_secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, "any_account_id");
        assert!(decoded.claims.exp > decoded.claims.iat);
    }

    #[test]
    fn test_token_is_rejected_with_wrong_secret() {
        let sut = JwtAdapter::new("test_secret");

        let token = sut.encrypt("any_account_id").unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other_secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
