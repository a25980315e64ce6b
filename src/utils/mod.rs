//! 유틸리티 어댑터

pub mod email_validator_adapter;

pub use email_validator_adapter::EmailValidatorAdapter;
