//! 이메일 형식 검증

use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::presentation::protocols::{EmailValidator, Validation};

/// 이메일 형식 검증
///
/// 주입된 [`EmailValidator`]가 거부하면 `InvalidParam`을 반환합니다.
/// "유효한 이메일"의 정의는 전적으로 주입된 검사기에 위임합니다.
pub struct EmailValidation {
    field: String,
    email_validator: Box<dyn EmailValidator>,
}

impl EmailValidation {
    pub fn new(field: impl Into<String>, email_validator: Box<dyn EmailValidator>) -> Self {
        Self {
            field: field.into(),
            email_validator,
        }
    }
}

impl Validation for EmailValidation {
    fn validate(&self, input: &Value) -> AppResult<()> {
        let email = input.get(&self.field).and_then(Value::as_str).unwrap_or("");

        if !self.email_validator.is_valid(email) {
            return Err(AppError::InvalidParam(self.field.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// 호출 인자를 기록하는 스텁 검사기
    struct EmailValidatorStub {
        is_valid: bool,
        received: Arc<Mutex<Vec<String>>>,
    }

    impl EmailValidator for EmailValidatorStub {
        fn is_valid(&self, email: &str) -> bool {
            self.received.lock().unwrap().push(email.to_string());
            self.is_valid
        }
    }

    fn make_sut(is_valid: bool) -> (EmailValidation, Arc<Mutex<Vec<String>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let stub = EmailValidatorStub {
            is_valid,
            received: received.clone(),
        };
        (EmailValidation::new("email", Box::new(stub)), received)
    }

    #[test]
    fn test_fails_when_checker_rejects() {
        let (sut, _) = make_sut(false);

        let error = sut.validate(&json!({ "email": "invalid_email" })).unwrap_err();

        assert_eq!(error, AppError::InvalidParam("email".to_string()));
    }

    #[test]
    fn test_passes_when_checker_accepts() {
        let (sut, _) = make_sut(true);

        assert!(sut.validate(&json!({ "email": "any@email.com" })).is_ok());
    }

    #[test]
    fn test_delegates_field_value_to_checker() {
        let (sut, received) = make_sut(true);

        sut.validate(&json!({ "email": "any@email.com" })).unwrap();

        assert_eq!(*received.lock().unwrap(), vec!["any@email.com".to_string()]);
    }
}
