//! 암호화 어댑터

pub mod bcrypt_adapter;
pub mod jwt_adapter;

pub use bcrypt_adapter::BcryptAdapter;
pub use jwt_adapter::JwtAdapter;
