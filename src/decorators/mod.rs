//! # 컨트롤러 데코레이터
//!
//! 컨트롤러를 감싸 횡단 관심사를 추가하는 계층입니다.
//! 현재는 500 응답의 내부 상세를 에러 컬렉션에 남기는
//! 로그 데코레이터만 존재합니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::error;

use crate::data::protocols::LogErrorRepository;
use crate::presentation::protocols::{Controller, HttpRequest, HttpResponse};

/// 에러 로그 데코레이터
///
/// 감싼 컨트롤러에 요청을 그대로 위임하고, 응답이 500이면서
/// 내부 상세(`stack`)를 담고 있으면 에러 로그 리포지토리에 저장합니다.
/// 저장 실패는 로그만 남기고 응답에는 영향을 주지 않습니다 (fire-and-forget).
pub struct LogControllerDecorator {
    controller: Box<dyn Controller>,
    log_repository: Arc<dyn LogErrorRepository>,
}

impl LogControllerDecorator {
    pub fn new(controller: Box<dyn Controller>, log_repository: Arc<dyn LogErrorRepository>) -> Self {
        Self {
            controller,
            log_repository,
        }
    }
}

#[async_trait]
impl Controller for LogControllerDecorator {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.status_code == 500 {
            if let Some(stack) = &response.stack {
                if let Err(e) = self.log_repository.log_error(stack).await {
                    error!("에러 로그 저장 실패: {}", e.detail());
                }
            }
        }

        response
    }
}
