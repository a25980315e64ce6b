//! 이메일 형식 검사 프로토콜

/// 이메일 형식 검사 능력
///
/// 문자열이 유효한 이메일인지 판단하는 외부 능력의 추상화입니다.
/// "유효한 이메일"의 정의는 전적으로 구현체(어댑터)에 위임됩니다.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}
