//! 검증 컴포지트

use serde_json::Value;

use crate::errors::AppResult;
use crate::presentation::protocols::Validation;

/// 검증 규칙들의 fail-fast 합성
///
/// 생성 시 전달된 순서대로 검증을 실행하고, 처음 실패한 규칙의 에러를
/// 즉시 반환합니다(이후 규칙은 실행되지 않음). 모두 통과하면 `Ok(())`입니다.
///
/// 순서가 곧 설계입니다. 여러 필드가 동시에 잘못된 경우 어떤 에러가
/// 보고될지는 생성 순서가 결정합니다. 에러를 모아서 반환하는 모델이 아니라
/// 하나만 보고하는 fail-fast 모델입니다.
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &Value) -> AppResult<()> {
        for validation in &self.validations {
            validation.validate(input)?;
        }
        Ok(())
    }
}
