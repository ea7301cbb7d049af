//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 계정 조회 캐시를 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("account_repository:64f...", &account, 600).await?;
//!
//! let cached: Option<Account> = cache.get("account_repository:64f...").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
