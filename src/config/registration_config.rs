//! 가입/인증 정책 설정
//!
//! 인증 코드의 유효 시간과 두 가지 정책 플래그를 관리합니다.
//! 두 플래그 모두 기본값은 `false`입니다.

use chrono::Duration;

/// 기본 인증 코드 유효 시간 (분)
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 10;

/// 허용하는 최대 유효 시간 (분). 하루.
pub const MAX_CODE_TTL_MINUTES: i64 = 24 * 60;

/// 인증 코드 관련 환경 설정
pub struct VerificationConfig;

impl VerificationConfig {
    /// `VERIFICATION_CODE_TTL_MINUTES` (기본값: 10)
    ///
    /// `1..=MAX_CODE_TTL_MINUTES` 밖의 값은 무시하고 기본값을 사용합니다.
    pub fn code_ttl_minutes() -> i64 {
        checked_ttl_minutes(super::env_parsed(
            "VERIFICATION_CODE_TTL_MINUTES",
            DEFAULT_CODE_TTL_MINUTES,
        ))
    }

    /// 가입/재발송 응답에 평문 인증 코드를 포함할지 여부
    ///
    /// `EXPOSE_CODE_IN_RESPONSE` (기본값: false). 데모/테스트 환경에서만 켭니다.
    pub fn expose_code_in_response() -> bool {
        super::env_flag("EXPOSE_CODE_IN_RESPONSE", false)
    }

    /// 프로필 수정 전에 이메일 인증을 요구할지 여부
    ///
    /// `REQUIRE_VERIFIED_FOR_UPDATE` (기본값: false)
    pub fn require_verified_for_update() -> bool {
        super::env_flag("REQUIRE_VERIFIED_FOR_UPDATE", false)
    }
}

fn checked_ttl_minutes(minutes: i64) -> i64 {
    if (1..=MAX_CODE_TTL_MINUTES).contains(&minutes) {
        minutes
    } else {
        log::error!(
            "VERIFICATION_CODE_TTL_MINUTES는 1~{} 사이여야 합니다: {}. 기본값 {} 사용",
            MAX_CODE_TTL_MINUTES,
            minutes,
            DEFAULT_CODE_TTL_MINUTES
        );
        DEFAULT_CODE_TTL_MINUTES
    }
}

/// 워크플로우가 참조하는 가입 정책
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationPolicy {
    /// 인증 코드 유효 시간. 발급/재발송 시점마다 새로 시작됩니다.
    pub code_ttl: Duration,
    pub expose_code_in_response: bool,
    pub require_verified_for_update: bool,
}

impl RegistrationPolicy {
    pub fn from_env() -> Self {
        Self {
            code_ttl: Duration::minutes(VerificationConfig::code_ttl_minutes()),
            expose_code_in_response: VerificationConfig::expose_code_in_response(),
            require_verified_for_update: VerificationConfig::require_verified_for_update(),
        }
    }
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            code_ttl: Duration::minutes(DEFAULT_CODE_TTL_MINUTES),
            expose_code_in_response: false,
            require_verified_for_update: false,
        }
    }
}
