//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체입니다.
//! JSON 필드는 camelCase를 사용합니다.
//!
//! | 구분 | 위치 | 역할 |
//! |------|------|------|
//! | 요청 | [`accounts::request`] | 본문/쿼리 매핑 + `validator` 검증 |
//! | 응답 | [`accounts::response`] | 엔티티 → 외부 노출용 변환 |

pub mod accounts;
