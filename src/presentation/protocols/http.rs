//! HTTP 요청/응답 프로토콜
//!
//! 컨트롤러가 소비하고 생산하는 프레임워크 독립적인 HTTP 표현입니다.
//! actix-web의 타입은 라우트 어댑터에서만 사용되며,
//! 컨트롤러 계층은 이 타입들만 알고 있습니다.

use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// 프레임워크 독립적인 HTTP 요청
///
/// 메서드에 무관한 JSON 본문 가방입니다.
/// 각 핸들러가 기대하는 필드 외에는 어떤 스키마도 강제하지 않습니다.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// JSON 요청 본문
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// 본문에서 문자열 필드를 추출합니다.
    ///
    /// 검증을 통과한 필드라도 문자열이 아닌 타입일 수 있으므로
    /// (예: 숫자로 전달된 `name`), 타입 불일치는 `InvalidParam`으로 처리합니다.
    pub fn body_str(&self, field: &str) -> AppResult<&str> {
        self.body
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::InvalidParam(field.to_string()))
    }
}

/// 프레임워크 독립적인 HTTP 응답
///
/// 상태 코드와 JSON 본문의 쌍입니다. `stack` 필드는 500 응답에서만 채워지는
/// 내부 전용 에러 상세 정보로, 클라이언트에는 절대 전송되지 않고
/// 로그 데코레이터가 에러 컬렉션에 저장할 때만 사용합니다.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP 상태 코드
    pub status_code: u16,
    /// 응답 본문 (성공 페이로드 또는 에러 값)
    pub body: Value,
    /// 내부 전용 에러 상세 (500 응답에서만 존재)
    pub stack: Option<String>,
}
