//! 계정 가입/인증/프로필 워크플로우

pub mod account_service;

pub use account_service::AccountService;
