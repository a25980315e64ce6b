//! 애플리케이션 설정 모듈
//!
//! 환경 변수에서 서비스 설정을 읽어옵니다. 모든 설정은 합리적인
//! 기본값을 가지며, 파싱 실패 시 에러 로그를 남기고 기본값을 사용합니다.
//!
//! # 환경 변수
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `BIND_ADDRESS` | `127.0.0.1:8080` | HTTP 서버 바인드 주소 |
//! | `JWT_SECRET` | `dev_secret_change_me` | 액세스 토큰 서명 키 |
//! | `BCRYPT_COST` | `12` | bcrypt cost 파라미터 |
//! | `RATE_LIMIT_PER_SECOND` | `100` | 초당 허용 요청 수 |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | 버스트 허용량 |

use std::env;

use log::{error, warn};

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// 애플리케이션 전역 설정
#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP 서버 바인드 주소
    pub bind_address: String,
    /// 액세스 토큰 서명 비밀키
    pub jwt_secret: String,
    /// bcrypt cost 파라미터
    pub bcrypt_cost: u32,
    /// Rate Limiting 설정
    pub rate_limit: RateLimitConfig,
}

impl Settings {
    /// 환경 변수에서 설정을 로드합니다.
    pub fn from_env() -> Self {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET 미설정. 개발용 기본값 사용 (운영 환경에서는 반드시 설정할 것)");
            "dev_secret_change_me".to_string()
        });

        let bcrypt_cost = parse_env("BCRYPT_COST", bcrypt::DEFAULT_COST);

        let rate_limit = RateLimitConfig {
            per_second: parse_env("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env("RATE_LIMIT_BURST_SIZE", 200),
        };

        Self {
            bind_address,
            jwt_secret,
            bcrypt_cost,
            rate_limit,
        }
    }
}

/// 환경 변수를 파싱하고, 실패 시 기본값으로 폴백합니다.
fn parse_env<T: std::str::FromStr + std::fmt::Display + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            error!("{} 파싱 실패: '{}'. 기본값 {} 사용", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_on_missing() {
        assert_eq!(parse_env("DEFINITELY_NOT_SET_VAR", 42u32), 42);
    }
}
