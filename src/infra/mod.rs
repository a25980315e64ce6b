//! # 인프라 계층
//!
//! 데이터 계층 프로토콜의 구체적인 어댑터들입니다.
//! bcrypt/JWT 암호화 어댑터와 MongoDB 리포지토리를 포함합니다.

pub mod cryptography;
pub mod db;
