//! # 검증 계층
//!
//! 요청 본문에 대한 단일 목적 검증 규칙들과 이를 합성하는 컴포지트입니다.
//! 모든 규칙은 [`Validation`](crate::presentation::protocols::Validation)
//! 계약을 구현하는 상태 없는 순수 검사이며, 입력을 변경하지 않습니다.
//!
//! - [`RequiredFieldValidation`]: 필수 필드 존재 여부
//! - [`EmailValidation`]: 주입된 검사기를 통한 이메일 형식
//! - [`CompareFieldsValidation`]: 필드 간 일치 (비밀번호 확인 등)
//! - [`ValidationComposite`]: 순서 있는 fail-fast 합성

pub mod compare_fields;
pub mod composite;
pub mod email;
pub mod required_field;

pub use compare_fields::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::EmailValidation;
pub use required_field::RequiredFieldValidation;
