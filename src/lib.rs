//! 사용자 가입 서비스 백엔드
//!
//! 이메일 인증 코드 기반의 사용자 가입과, 우편번호/기업 정보 조회를 통한
//! 프로필 보강을 제공하는 서비스입니다.
//!
//! # Features
//!
//! - **가입**: 이메일/전화번호 중복 방지, 6자리 인증 코드 발급
//! - **이메일 인증**: 만료 시각 검사, 1회용 코드, 재발송
//! - **프로필 보강**: ViaCEP 주소 조회, CNPJ.ws 기업 정보 조회
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB + Redis**: 계정 저장과 조회 캐시 (메모리 저장소로 대체 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가입 워크플로우, 메일, 외부 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore 구현체
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_registration_backend::config::RegistrationPolicy;
//! use user_registration_backend::repositories::accounts::InMemoryAccountRepository;
//! use user_registration_backend::services::accounts::AccountService;
//! use user_registration_backend::services::lookups::ViaCepService;
//! use user_registration_backend::services::notifications::MailService;
//! use user_registration_backend::services::verification::SystemClock;
//!
//! let service = AccountService::new(
//!     Arc::new(InMemoryAccountRepository::new()),
//!     MailService::instance(),
//!     ViaCepService::instance(),
//!     Arc::new(SystemClock),
//!     RegistrationPolicy::from_env(),
//! );
//! let created = service.create_account(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
