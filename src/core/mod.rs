//! # Core Framework Module
//!
//! 서비스 전역에서 공유하는 핵심 프레임워크 기능입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 싱글톤 인스턴스 저장소
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록
//! - **의존성 해결**: `Arc<T>` 필드 자동 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 가입/인증 워크플로우의 모든 거부 사유
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use singleton_macro::service;
//!
//! #[service(name = "mail")]
//! pub struct MailService {
//!     transport: Arc<MailTransport>, // ServiceLocator::set 으로 등록된 인스턴스 주입
//! }
//!
//! let mail = MailService::instance();
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
