//! # 데이터 계층
//!
//! 도메인 유스케이스 계약의 실제 구현과, 구현이 의존하는
//! 외부 능력(해싱, 토큰 발급, 저장소)의 프로토콜을 정의합니다.
//! 구체적인 어댑터는 [`crate::infra`]에 있습니다.

pub mod protocols;
pub mod usecases;
