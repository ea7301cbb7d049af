//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (Account)
//! ├── models/       ← 값 객체 (인증 코드, 주소, 기업 정보)
//! └── dto/          ← 요청/응답 객체
//! ```

pub mod accounts;
