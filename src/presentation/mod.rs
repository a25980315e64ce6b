//! # 프레젠테이션 계층
//!
//! HTTP 요청을 받아 응답으로 변환하는 계층입니다.
//! 컨트롤러는 프레임워크 독립적인 [`protocols::HttpRequest`] /
//! [`protocols::HttpResponse`] 타입만 다루며, actix-web과의 연결은
//! 라우트 어댑터([`crate::handlers`])의 책임입니다.

pub mod controllers;
pub mod helpers;
pub mod protocols;
