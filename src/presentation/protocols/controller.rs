//! 컨트롤러 프로토콜

use async_trait::async_trait;

use crate::presentation::protocols::http::{HttpRequest, HttpResponse};

/// 요청 핸들러(컨트롤러) 계약
///
/// 하나의 HTTP 요청을 받아 반드시 하나의 HTTP 응답으로 변환합니다.
/// 이 메서드는 절대 실패하지 않습니다. 검증 실패, 유스케이스 오류,
/// 예상치 못한 내부 오류까지 모든 경로가 상태 코드가 매핑된 응답으로 귀결됩니다.
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
