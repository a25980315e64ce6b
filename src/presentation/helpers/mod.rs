//! 프레젠테이션 헬퍼

pub mod http_helpers;
