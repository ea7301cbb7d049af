//! Accounts Entity Module
//!
//! 가입 계정 엔티티를 정의하는 모듈입니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::accounts::Account;
//!
//! let mut account = Account::new_pending(name, email, phone, code, DateTime::now());
//! account.confirm_email("482913", DateTime::now())?;
//! ```

pub mod account;

pub use account::{Account, ProfileChanges};
