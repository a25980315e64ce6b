//! 이메일 형식 검사 어댑터
//!
//! validator 크레이트의 이메일 검사를
//! [`EmailValidator`](crate::presentation::protocols::EmailValidator)
//! 계약에 맞게 감쌉니다.

use validator::ValidateEmail;

use crate::presentation::protocols::EmailValidator;

/// validator 크레이트 기반 이메일 형식 검사기
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> bool {
        email.validate_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_email() {
        let sut = EmailValidatorAdapter;

        assert!(sut.is_valid("valid_email@email.com"));
        assert!(sut.is_valid("user+tag@sub.domain.org"));
    }

    #[test]
    fn test_rejects_malformed_email() {
        let sut = EmailValidatorAdapter;

        assert!(!sut.is_valid("invalid_email"));
        assert!(!sut.is_valid("missing_domain@"));
        assert!(!sut.is_valid(""));
    }
}
