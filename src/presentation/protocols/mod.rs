//! 프레젠테이션 프로토콜
//!
//! 컨트롤러 계층이 의존하는 계약들의 모음입니다.

pub mod controller;
pub mod email_validator;
pub mod http;
pub mod validation;

pub use controller::Controller;
pub use email_validator::EmailValidator;
pub use http::{HttpRequest, HttpResponse};
pub use validation::Validation;
