//! 계정 서비스 백엔드
//!
//! Rust 기반의 계정 생성(회원가입) 및 로그인 서비스입니다.
//! 계층형 클린 아키텍처를 따르며, 컨트롤러는 합성 가능한 검증 객체에
//! 검증을 위임하고, 저장은 MongoDB 기반 리포지토리 추상화에 위임합니다.
//!
//! # Features
//!
//! - **회원가입**: 필드 존재/이메일 형식/비밀번호 확인 검증 후 계정 생성
//! - **로그인**: bcrypt 비밀번호 검증 및 JWT 액세스 토큰 발급
//! - **검증 컴포지트**: 순서 있는 fail-fast 검증 규칙 합성
//! - **에러 로깅**: 예상치 못한 500 응답의 내부 상세를 errors 컬렉션에 기록
//! - **MongoDB**: 계정 데이터 영구 저장 (이메일 유니크 인덱스)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (actix-web)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Controllers    │ ← 검증 컴포지트 + 요청/응답 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Use Cases     │ ← 계정 생성, 로그인 인증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (accounts, errors)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 실패 경로는 컨트롤러 경계에서 HTTP 응답으로 귀결됩니다.
//! 검증 에러는 위반 필드를 명시한 400으로, 내부 오류는 상세를 숨긴
//! 제네릭 500으로 매핑되며 원본 상세는 에러 컬렉션에만 남습니다.

pub mod config;
pub mod data;
pub mod db;
pub mod decorators;
pub mod domain;
pub mod errors;
pub mod factories;
pub mod handlers;
pub mod infra;
pub mod presentation;
pub mod routes;
pub mod utils;
pub mod validation;
