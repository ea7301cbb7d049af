//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 `dotenv`로 먼저 읽어 들인 뒤
//! 각 설정 구조체가 필요한 값을 조회합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 저장소(MongoDB/Redis/메모리) 설정
//! - [`registration_config`] - 인증 코드 TTL, 코드 노출 여부, 수정 전 인증 요구 정책
//! - [`integration_config`] - 메일 발송, 주소/기업 조회 API 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # 저장소
//! export ACCOUNT_STORE="mongo"                 # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_registration"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 가입 정책
//! export VERIFICATION_CODE_TTL_MINUTES="10"
//! export EXPOSE_CODE_IN_RESPONSE="false"
//! export REQUIRE_VERIFIED_FOR_UPDATE="false"
//!
//! # 메일
//! export MAIL_TRANSPORT="smtp"                 # smtp | log
//! export MAIL_HOST="smtp.ethereal.email"
//! export MAIL_PORT="587"
//! export MAIL_USER="..."
//! export MAIL_PASS="..."
//!
//! # 외부 조회
//! export VIACEP_BASE_URL="https://viacep.com.br/ws"
//! export CNPJ_BASE_URL="https://publica.cnpj.ws/cnpj"
//! export LOOKUP_TIMEOUT_SECS="10"
//! ```
//!
//! 파싱할 수 없는 값은 에러 로그를 남기고 기본값을 사용합니다.

pub mod data_config;
pub mod registration_config;
pub mod integration_config;

pub use data_config::*;
pub use registration_config::*;
pub use integration_config::*;

use std::env;
use std::str::FromStr;

/// 환경 변수를 읽어 파싱합니다. 없거나 파싱에 실패하면 `default`를 돌려줍니다.
pub(crate) fn env_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
        Err(_) => default,
    }
}

/// 불리언 플래그 환경 변수를 읽습니다.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
            log::error!("{} 값 '{}'을(를) 해석할 수 없습니다. 기본값 {} 사용", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// `true/false`, `1/0`, `yes/no`, `on/off`를 대소문자 구분 없이 해석합니다.
pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
