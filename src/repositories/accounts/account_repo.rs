//! # 계정 리포지토리 (MongoDB)
//!
//! `accounts` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `account_repository:{account_id}` (매크로 생성 `cache_key`)
//! - **TTL**: 600초
//! - `find_by_id`만 캐싱합니다. 저장에 성공하면 새 버전으로 덮어쓰고, 버전 충돌이면 지웁니다.
//! - 인증/수정 흐름은 `load_for_update`로 캐시를 건너뛰고 MongoDB에서 직접 읽습니다.
//!   캐시에 남은 이전 버전이 코드 검사나 버전 검사에 쓰이지 않습니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `email_unique` | `email: 1` | unique |
//! | `phone_unique` | `phone: 1` | unique |
//! | `created_at_desc` | `created_at: -1` | |

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::accounts::Account,
};
use super::AccountStore;

/// 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

const CACHE_TTL_SECONDS: u64 = 600;

#[repository(name = "account", collection = "accounts")]
pub struct AccountRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl AccountRepository {
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<Account>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let phone_index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("phone_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, phone_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ accounts 인덱스 생성 완료");
        Ok(())
    }

    async fn find_in_db(&self, object_id: ObjectId) -> AppResult<Option<Account>> {
        self.collection::<Account>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn evict(&self, id: &str) {
        if let Err(e) = self.redis.del(&self.cache_key(id)).await {
            log::warn!("계정 캐시 삭제 실패 ({}): {}", id, e);
        }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Account>(&cache_key).await {
            return Ok(Some(cached));
        }

        let account = self.find_in_db(object_id).await?;

        if let Some(ref account) = account {
            let _ = self.redis
                .set_with_expiry(&cache_key, account, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(account)
    }

    async fn load_for_update(&self, id: &str) -> AppResult<Option<Account>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.find_in_db(object_id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.collection::<Account>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email_or_phone(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> AppResult<Option<Account>> {
        let Some(filter) = contact_filter(email, phone) else {
            return Ok(None);
        };

        self.collection::<Account>()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, account: Account) -> AppResult<Account> {
        self.collection::<Account>()
            .insert_one(&account)
            .await
            .map_err(map_write_error)?;

        log::debug!("계정 저장: {}", account.id_hex());
        Ok(account)
    }

    async fn save(&self, account: Account) -> AppResult<Account> {
        let id = account.id_hex();
        let current_version = account.version;
        let next = Account {
            version: current_version + 1,
            ..account
        };

        let result = self.collection::<Account>()
            .replace_one(doc! { "_id": next.id, "version": current_version }, &next)
            .await
            .map_err(map_write_error)?;

        if result.matched_count == 0 {
            self.evict(&id).await;
            return Err(AppError::ConcurrentModification(format!(
                "계정이 다른 요청에 의해 변경되었습니다: {}",
                id
            )));
        }

        if let Err(e) = self.redis
            .set_with_expiry(&self.cache_key(&id), &next, CACHE_TTL_SECONDS)
            .await
        {
            log::warn!("계정 캐시 갱신 실패 ({}): {}", id, e);
            self.evict(&id).await;
        }

        Ok(next)
    }
}

/// email/phone 중 주어진 값으로 `$or` 필터를 만듭니다.
fn contact_filter(email: Option<&str>, phone: Option<&str>) -> Option<Document> {
    let mut clauses = Vec::with_capacity(2);
    if let Some(email) = email {
        clauses.push(doc! { "email": email });
    }
    if let Some(phone) = phone {
        clauses.push(doc! { "phone": phone });
    }

    if clauses.is_empty() {
        None
    } else {
        Some(doc! { "$or": clauses })
    }
}

fn map_write_error(e: MongoError) -> AppError {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE => {
            AppError::DuplicateContact("이미 사용 중인 이메일 또는 전화번호입니다".to_string())
        }
        _ => AppError::DatabaseError(e.to_string()),
    }
}
