//! 계정 생성 유스케이스 구현

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::protocols::{AddAccountRepository, Hasher, LoadAccountByEmailRepository};
use crate::domain::models::account::Account;
use crate::domain::usecases::add_account::{AddAccount, AddAccountParams};
use crate::errors::{AppError, AppResult};

/// 데이터베이스 기반 계정 생성 유스케이스
///
/// 처리 순서:
/// 1. 이메일 중복 확인 (중복 시 `EmailInUse`)
/// 2. 비밀번호 해싱
/// 3. 해시된 비밀번호로 계정 저장
pub struct DbAddAccount {
    hasher: Box<dyn Hasher>,
    add_account_repository: Arc<dyn AddAccountRepository>,
    load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
}

impl DbAddAccount {
    pub fn new(
        hasher: Box<dyn Hasher>,
        add_account_repository: Arc<dyn AddAccountRepository>,
        load_account_by_email_repository: Arc<dyn LoadAccountByEmailRepository>,
    ) -> Self {
        Self {
            hasher,
            add_account_repository,
            load_account_by_email_repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, params: AddAccountParams) -> AppResult<Account> {
        // 이메일 중복 확인
        if self
            .load_account_by_email_repository
            .load_by_email(&params.email)
            .await?
            .is_some()
        {
            return Err(AppError::EmailInUse);
        }

        let hashed_password = self.hasher.hash(&params.password)?;

        self.add_account_repository
            .add(AddAccountParams {
                password: hashed_password,
                ..params
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct HasherStub {
        result: AppResult<String>,
    }

    impl Hasher for HasherStub {
        fn hash(&self, _value: &str) -> AppResult<String> {
            self.result.clone()
        }
    }

    struct AddAccountRepositoryStub {
        received: Mutex<Vec<AddAccountParams>>,
    }

    #[async_trait]
    impl AddAccountRepository for AddAccountRepositoryStub {
        async fn add(&self, params: AddAccountParams) -> AppResult<Account> {
            self.received.lock().unwrap().push(params.clone());
            Ok(Account {
                id: "any_id".to_string(),
                name: params.name,
                email: params.email,
                password: params.password,
            })
        }
    }

    struct LoadAccountByEmailRepositoryStub {
        result: AppResult<Option<Account>>,
    }

    #[async_trait]
    impl LoadAccountByEmailRepository for LoadAccountByEmailRepositoryStub {
        async fn load_by_email(&self, _email: &str) -> AppResult<Option<Account>> {
            self.result.clone()
        }
    }

    fn params() -> AddAccountParams {
        AddAccountParams {
            name: "any_name".to_string(),
            email: "any@email.com".to_string(),
            password: "plain_password".to_string(),
        }
    }

    fn make_sut(
        existing: AppResult<Option<Account>>,
        hash_result: AppResult<String>,
    ) -> (DbAddAccount, Arc<AddAccountRepositoryStub>) {
        let add_repo = Arc::new(AddAccountRepositoryStub {
            received: Mutex::new(Vec::new()),
        });
        let sut = DbAddAccount::new(
            Box::new(HasherStub {
                result: hash_result,
            }),
            add_repo.clone(),
            Arc::new(LoadAccountByEmailRepositoryStub { result: existing }),
        );
        (sut, add_repo)
    }

    #[actix_web::test]
    async fn test_rejects_duplicate_email() {
        let existing = Account {
            id: "existing_id".to_string(),
            name: "existing".to_string(),
            email: "any@email.com".to_string(),
            password: "hash".to_string(),
        };
        let (sut, add_repo) = make_sut(Ok(Some(existing)), Ok("hashed".to_string()));

        let error = sut.add(params()).await.unwrap_err();

        assert_eq!(error, AppError::EmailInUse);
        assert!(add_repo.received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_stores_hashed_password_not_plain() {
        let (sut, add_repo) = make_sut(Ok(None), Ok("hashed_password".to_string()));

        let account = sut.add(params()).await.unwrap();

        let calls = add_repo.received.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].password, "hashed_password");
        assert_eq!(account.password, "hashed_password");
        assert_eq!(account.name, "any_name");
    }

    #[actix_web::test]
    async fn test_propagates_hash_failure() {
        let (sut, add_repo) = make_sut(
            Ok(None),
            Err(AppError::HashError("bad cost".to_string())),
        );

        let error = sut.add(params()).await.unwrap_err();

        assert_eq!(error, AppError::HashError("bad cost".to_string()));
        assert!(add_repo.received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_propagates_load_failure() {
        let (sut, _) = make_sut(
            Err(AppError::DatabaseError("find failed".to_string())),
            Ok("hashed".to_string()),
        );

        let error = sut.add(params()).await.unwrap_err();

        assert!(error.is_server_error());
    }
}
