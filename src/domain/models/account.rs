//! 계정 모델
//!
//! 시스템의 사용자 계정을 표현하는 핵심 도메인 모델입니다.
//! 유스케이스 계층이 생성하여 반환하며, 반환된 이후에는 변경되지 않습니다.

use serde::{Deserialize, Serialize};

/// 계정 모델
///
/// 회원가입 유스케이스가 반환하는 불변 계정 표현입니다.
/// `password`는 항상 해시된 값이며, 평문 비밀번호는 이 타입에 담기지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// 계정 고유 ID (MongoDB ObjectId의 16진수 문자열)
    pub id: String,
    /// 사용자 이름
    pub name: String,
    /// 이메일 주소 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
}
