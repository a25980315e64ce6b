//! 유스케이스 계약
//!
//! 컨트롤러가 소비하는 비즈니스 능력의 추상화입니다.

pub mod add_account;
pub mod authentication;
