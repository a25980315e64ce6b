//! # 계정 리포지토리 구현
//!
//! 계정 엔티티의 데이터 액세스 계층입니다. MongoDB의 `accounts` 컬렉션을
//! 사용하며, 이메일 필드에 유니크 인덱스를 유지합니다.
//!
//! 유스케이스 계층은 이 타입을 직접 알지 못하고
//! [`AddAccountRepository`] / [`LoadAccountByEmailRepository`] /
//! [`UpdateAccessTokenRepository`] 계약을 통해서만 접근합니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::data::protocols::{
    AddAccountRepository, LoadAccountByEmailRepository, UpdateAccessTokenRepository,
};
use crate::db::Database;
use crate::domain::models::account::Account;
use crate::domain::usecases::add_account::AddAccountParams;
use crate::errors::{AppError, AppResult};

/// 컬렉션명
const COLLECTION_NAME: &str = "accounts";

/// `accounts` 컬렉션 문서
///
/// 도메인 모델과 저장 형식을 분리합니다. `access_token`은 로그인 시에만
/// 기록되며, 도메인 모델에는 노출되지 않습니다.
#[derive(Debug, Serialize, Deserialize)]
struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    created_at: DateTime,
}

impl AccountDocument {
    /// 저장된 문서를 도메인 모델로 변환합니다.
    fn into_account(self) -> AppResult<Account> {
        let id = self
            .id
            .ok_or_else(|| AppError::DatabaseError("account document has no _id".to_string()))?;
        Ok(Account {
            id: id.to_hex(),
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

/// 계정 데이터 액세스 리포지토리
pub struct AccountMongoRepository {
    db: Database,
}

impl AccountMongoRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<AccountDocument> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 이메일 유니크 인덱스를 보장합니다.
    ///
    /// 서버 기동 시 한 번 호출됩니다. 중복 계정 거부는 유스케이스의
    /// 사전 조회와 이 인덱스의 이중 방어로 이루어집니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection()
            .create_index(model)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl AddAccountRepository for AccountMongoRepository {
    async fn add(&self, params: AddAccountParams) -> AppResult<Account> {
        let document = AccountDocument {
            id: None,
            name: params.name.clone(),
            email: params.email.clone(),
            password: params.password.clone(),
            access_token: None,
            created_at: DateTime::now(),
        };

        let result = self
            .collection()
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("inserted_id is not an ObjectId".to_string()))?;

        Ok(Account {
            id: id.to_hex(),
            name: params.name,
            email: params.email,
            password: params.password,
        })
    }
}

#[async_trait]
impl LoadAccountByEmailRepository for AccountMongoRepository {
    async fn load_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let document = self
            .collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        document.map(AccountDocument::into_account).transpose()
    }
}

#[async_trait]
impl UpdateAccessTokenRepository for AccountMongoRepository {
    async fn update_access_token(&self, id: &str, token: &str) -> AppResult<()> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|e| AppError::DatabaseError(format!("invalid account id {}: {}", id, e)))?;

        self.collection()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "access_token": token } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
