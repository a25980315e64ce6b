//! # 컴포지션 루트 (팩토리)
//!
//! 컨트롤러 객체 그래프를 조립하는 모듈입니다. 검증 컴포지트의 규칙 순서,
//! 유스케이스와 어댑터의 연결, 로그 데코레이터 적용이 모두 이곳에서
//! 결정됩니다. 모든 구성 요소는 상태가 없거나 요청마다 새로 조립되므로
//! 동시 요청 간 공유 가변 상태가 없습니다.

use std::sync::Arc;

use crate::config::Settings;
use crate::data::usecases::{DbAddAccount, DbAuthentication};
use crate::db::Database;
use crate::decorators::LogControllerDecorator;
use crate::infra::cryptography::{BcryptAdapter, JwtAdapter};
use crate::infra::db::{AccountMongoRepository, LogMongoRepository};
use crate::presentation::controllers::{LoginController, SignUpController};
use crate::presentation::protocols::{Controller, Validation};
use crate::utils::EmailValidatorAdapter;
use crate::validation::{
    CompareFieldsValidation, EmailValidation, RequiredFieldValidation, ValidationComposite,
};

/// 회원가입 검증 컴포지트를 조립합니다.
///
/// 규칙 순서: 필수 필드 4개 → 이메일 형식 → 비밀번호 확인 일치.
/// 순서가 곧 보고 우선순위입니다 (fail-fast).
pub fn make_signup_validation() -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = Vec::new();

    for field in ["name", "email", "password", "passwordConfirmation"] {
        validations.push(Box::new(RequiredFieldValidation::new(field)));
    }
    validations.push(Box::new(EmailValidation::new(
        "email",
        Box::new(EmailValidatorAdapter),
    )));
    validations.push(Box::new(CompareFieldsValidation::new(
        "password",
        "passwordConfirmation",
    )));

    ValidationComposite::new(validations)
}

/// 로그인 검증 컴포지트를 조립합니다.
pub fn make_login_validation() -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = Vec::new();

    for field in ["email", "password"] {
        validations.push(Box::new(RequiredFieldValidation::new(field)));
    }
    validations.push(Box::new(EmailValidation::new(
        "email",
        Box::new(EmailValidatorAdapter),
    )));

    ValidationComposite::new(validations)
}

/// 회원가입 컨트롤러를 조립합니다.
///
/// 로그 데코레이터로 감싸 500 응답의 내부 상세가
/// `errors` 컬렉션에 남도록 합니다.
pub fn make_signup_controller(db: &Database, settings: &Settings) -> Box<dyn Controller> {
    let account_repository = Arc::new(AccountMongoRepository::new(db.clone()));

    let add_account = DbAddAccount::new(
        Box::new(BcryptAdapter::new(settings.bcrypt_cost)),
        account_repository.clone(),
        account_repository,
    );

    let controller = SignUpController::new(
        Box::new(make_signup_validation()),
        Box::new(add_account),
    );

    Box::new(LogControllerDecorator::new(
        Box::new(controller),
        Arc::new(LogMongoRepository::new(db.clone())),
    ))
}

/// 로그인 컨트롤러를 조립합니다.
pub fn make_login_controller(db: &Database, settings: &Settings) -> Box<dyn Controller> {
    let account_repository = Arc::new(AccountMongoRepository::new(db.clone()));

    let authentication = DbAuthentication::new(
        account_repository.clone(),
        Box::new(BcryptAdapter::new(settings.bcrypt_cost)),
        Box::new(JwtAdapter::new(settings.jwt_secret.clone())),
        account_repository,
    );

    let controller = LoginController::new(
        Box::new(make_login_validation()),
        Box::new(authentication),
    );

    Box::new(LogControllerDecorator::new(
        Box::new(controller),
        Arc::new(LogMongoRepository::new(db.clone())),
    ))
}
