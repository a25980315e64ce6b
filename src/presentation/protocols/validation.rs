//! 검증 프로토콜

use serde_json::Value;

use crate::errors::AppResult;

/// 단일 목적 검증 규칙 계약
///
/// 요청 본문 하나를 검사하여 위반된 규칙을 에러로 반환합니다.
/// 구현체는 상태가 없어야 하며, 입력을 절대 변경하지 않고 검사만 수행합니다.
pub trait Validation: Send + Sync {
    /// 입력을 검사합니다.
    ///
    /// * `Ok(())` - 규칙 통과
    /// * `Err(AppError)` - 위반된 규칙을 설명하는 에러
    fn validate(&self, input: &Value) -> AppResult<()>;
}
