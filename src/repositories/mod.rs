//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB 구현은 `#[repository]` 매크로로 싱글톤 관리되며 Redis 캐싱을 지원합니다.
//! 서비스 계층은 구현체가 아니라 [`accounts::AccountStore`] 트레이트를 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::{AccountRepository, AccountStore};
//!
//! let repo = AccountRepository::instance();
//! let account = repo.find_by_email("ana@x.com").await?;
//! ```

pub mod accounts;
