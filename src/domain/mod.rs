//! 도메인 계층
//!
//! 계정 모델과 유스케이스 계약을 정의합니다.
//! 프레젠테이션 계층은 이 trait들을 통해서만 비즈니스 로직에 접근합니다.

pub mod models;
pub mod usecases;
