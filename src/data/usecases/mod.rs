//! 유스케이스 구현체

pub mod db_add_account;
pub mod db_authentication;

pub use db_add_account::DbAddAccount;
pub use db_authentication::DbAuthentication;
