//! API 라우트 설정 모듈
//!
//! REST 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Available Routes
//!
//! - `POST /api/signup` - 계정 생성
//! - `POST /api/login` - 이메일/비밀번호 로그인
//! - `GET /health` - 헬스체크

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .service(handlers::signup)
            .service(handlers::login),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
