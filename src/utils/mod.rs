//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 식별자 형식 검사
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{digits_only, validate_required_string};
//!
//! let clean_name = validate_required_string("  Ana  ", "name")?;
//! let cep = digits_only("01001-000");
//! ```

pub mod string_utils;
