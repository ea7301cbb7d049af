//! # Domain Models Module
//!
//! 식별자 없이 값 자체로 의미를 갖는 도메인 모델입니다.
//!
//! - [`verification`] - 인증 코드와 인증 상태
//! - [`address`] - ViaCEP 응답과 정규화된 주소
//! - [`company`] - CNPJ.ws 응답과 기업 요약 정보

pub mod verification;
pub mod address;
pub mod company;

pub use verification::{VerificationCode, VerificationState};
pub use address::{PostalAddress, ViaCepAddress};
pub use company::{CnpjWsCompany, CompanyProfile};
