//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//!
//! ```text
//! Client
//!   │ HTTP Request/Response
//!   ▼
//! Handlers (이 모듈)      ← Web Layer: 요청 검증, 상태 코드 결정
//!   ▼
//! Services               ← 가입 워크플로우, 외부 조회
//!   ▼
//! Repositories           ← MongoDB / 메모리 저장소
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! 에러 응답 변환은 `AppError`의 `ResponseError` 구현이 맡습니다.
//!
//! 워크플로우 서비스는 협력자를 트레이트 객체로 주입받으므로 싱글톤 대신
//! `web::Data<AccountService>`로 전달됩니다.

pub mod accounts;
pub mod lookups;
