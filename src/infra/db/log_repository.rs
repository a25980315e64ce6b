//! 에러 로그 리포지토리 구현
//!
//! 예상치 못한 500 응답의 내부 상세를 MongoDB `errors` 컬렉션에 저장합니다.

use async_trait::async_trait;
use mongodb::bson::{doc, DateTime, Document};
use mongodb::Collection;

use crate::data::protocols::LogErrorRepository;
use crate::db::Database;
use crate::errors::{AppError, AppResult};

/// 컬렉션명
const COLLECTION_NAME: &str = "errors";

/// MongoDB 기반 에러 로그 리포지토리
pub struct LogMongoRepository {
    db: Database,
}

impl LogMongoRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.get_database().collection(COLLECTION_NAME)
    }
}

#[async_trait]
impl LogErrorRepository for LogMongoRepository {
    async fn log_error(&self, stack: &str) -> AppResult<()> {
        self.collection()
            .insert_one(doc! {
                "error": stack,
                "logged_at": DateTime::now(),
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
