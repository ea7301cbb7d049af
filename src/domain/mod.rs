//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - Account 엔티티와 인증 상태 전이 규칙
//! ├── dto       - 요청/응답 객체
//! └── models    - 인증 코드, 주소, 기업 정보 값 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
