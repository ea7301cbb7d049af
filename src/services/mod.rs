//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 연동 서비스(메일, ViaCEP, CNPJ)는 `#[service]` 매크로로 싱글톤 관리되고,
//! 가입 워크플로우인 [`accounts::AccountService`]는 트레이트 객체로 협력자를 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::lookups::ViaCepService;
//! use crate::services::notifications::MailService;
//!
//! let viacep = ViaCepService::instance();
//! let mail = MailService::instance();
//! ```

pub mod accounts;
pub mod lookups;
pub mod notifications;
pub mod verification;

#[cfg(test)]
pub(crate) mod testing;
