//! 필수 필드 검증

use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::presentation::protocols::Validation;

/// 필수 필드 존재 여부 검증
///
/// 지정된 필드가 요청 본문에 존재하지 않으면 `MissingParam`을 반환합니다.
///
/// "존재하지 않음"의 정의: 키 자체가 없거나, 값이 JSON `null`이거나,
/// 빈 문자열인 경우입니다. `0`과 `false`는 타입이 있는 구현에서는
/// 정상적인 값이므로 존재하는 것으로 간주합니다.
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &Value) -> AppResult<()> {
        let missing = match input.get(&self.field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };

        if missing {
            return Err(AppError::MissingParam(self.field.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fails_when_field_is_absent() {
        let sut = RequiredFieldValidation::new("name");

        let error = sut.validate(&json!({ "email": "any@email.com" })).unwrap_err();

        assert_eq!(error, AppError::MissingParam("name".to_string()));
    }

    #[test]
    fn test_fails_when_field_is_null() {
        let sut = RequiredFieldValidation::new("name");

        assert!(sut.validate(&json!({ "name": null })).is_err());
    }

    #[test]
    fn test_fails_when_field_is_empty_string() {
        let sut = RequiredFieldValidation::new("email");

        assert!(sut.validate(&json!({ "email": "" })).is_err());
    }

    #[test]
    fn test_passes_when_field_is_present() {
        let sut = RequiredFieldValidation::new("name");

        assert!(sut.validate(&json!({ "name": "any_name" })).is_ok());
    }

    #[test]
    fn test_zero_and_false_count_as_present() {
        let sut = RequiredFieldValidation::new("age");

        assert!(sut.validate(&json!({ "age": 0 })).is_ok());
        assert!(sut.validate(&json!({ "age": false })).is_ok());
    }
}
