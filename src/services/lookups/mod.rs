//! 외부 조회 서비스 모듈
//!
//! - [`ViaCepService`]: CEP(우편번호) → 주소. 워크플로우는 [`AddressLookup`] 계약으로만 사용합니다.
//! - [`CnpjService`]: CNPJ(기업 등록번호) → 기업 정보. 조회 전용 엔드포인트에서 사용합니다.

pub mod cnpj_service;
pub mod viacep_service;

use async_trait::async_trait;
use thiserror::Error;
use crate::domain::models::PostalAddress;

pub use cnpj_service::CnpjService;
pub use viacep_service::ViaCepService;

/// 주소 조회 실패 유형
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// 조회하기 전에 거부된 입력 (형식 오류)
    #[error("invalid postal code: {0}")]
    InvalidInput(String),

    #[error("postal code not found: {0}")]
    NotFound(String),

    #[error("lookup rate limited")]
    RateLimited,

    /// 네트워크 오류, 비정상 상태 코드, 해석할 수 없는 응답
    #[error("lookup unavailable: {0}")]
    Unavailable(String),
}

/// 우편번호 → 주소 조회 계약
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn resolve_address(&self, postal_code: &str) -> Result<PostalAddress, LookupError>;
}
