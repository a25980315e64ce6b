//! MongoDB 리포지토리 구현

pub mod account_repository;
pub mod log_repository;

pub use account_repository::AccountMongoRepository;
pub use log_repository::LogMongoRepository;
