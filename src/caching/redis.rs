//! # Redis 캐시 클라이언트 구현
//!
//! 계정 조회 결과를 JSON으로 직렬화하여 캐싱하는 클라이언트입니다.
//! `#[repository]` 매크로가 생성하는 `invalidate_*` 헬퍼는
//! 이 타입의 `del`, `keys`, `del_multiple` 메서드를 호출합니다.
//!
//! 연결은 `ConnectionManager` 하나를 복제해서 사용하며,
//! 끊어지면 자동으로 재연결됩니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use serde::{Serialize, de::DeserializeOwned};
use crate::config::StorageConfig;

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 `PING`으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, RedisError> {
        let client = Client::open(StorageConfig::redis_url())?;
        let mut manager = client.get_connection_manager().await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string()))
                })
            })
            .transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value).map_err(|e| {
            RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string()))
        })?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.manager.clone();
        conn.del(keys).await
    }

    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, RedisError> {
        let mut conn = self.manager.clone();
        conn.keys(pattern).await
    }
}
