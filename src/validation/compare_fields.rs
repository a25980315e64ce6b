//! 필드 간 일치 검증

use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::presentation::protocols::Validation;

/// 두 필드의 값이 일치하는지 검증
///
/// 비밀번호/비밀번호 확인처럼 교차 필드 일관성이 필요한 경우에 사용합니다.
/// 불일치 시 비교 대상 필드(`field_to_compare`) 이름으로 `InvalidParam`을 반환합니다.
pub struct CompareFieldsValidation {
    field: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &Value) -> AppResult<()> {
        if input.get(&self.field) != input.get(&self.field_to_compare) {
            return Err(AppError::InvalidParam(self.field_to_compare.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fails_when_fields_differ() {
        let sut = CompareFieldsValidation::new("password", "passwordConfirmation");
        let input = json!({
            "password": "any_password",
            "passwordConfirmation": "other_password",
        });

        let error = sut.validate(&input).unwrap_err();

        assert_eq!(
            error,
            AppError::InvalidParam("passwordConfirmation".to_string())
        );
    }

    #[test]
    fn test_passes_when_fields_match() {
        let sut = CompareFieldsValidation::new("password", "passwordConfirmation");
        let input = json!({
            "password": "any_password",
            "passwordConfirmation": "any_password",
        });

        assert!(sut.validate(&input).is_ok());
    }
}
