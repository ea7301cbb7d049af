//! 인증 코드 생성기
//!
//! 100000..=999999 범위에서 균등하게 뽑은 6자리 숫자 코드를 만듭니다.
//! 첫 자리는 0이 될 수 없습니다.
//!
//! 자동화된 가입을 막기 위한 짧은 수명의 코드일 뿐 보안 토큰이 아닙니다.
//! 6자리 공간은 무차별 대입에 약하므로 시도 횟수 제한이 필요한 환경이라면
//! 별도 계층에서 막아야 합니다.

use chrono::Duration;
use mongodb::bson::DateTime;
use rand::Rng;
use crate::domain::models::VerificationCode;

const CODE_RANGE: std::ops::Range<u32> = 100_000..1_000_000;

#[derive(Debug, Clone)]
pub struct CodeGenerator {
    ttl: Duration,
}

impl CodeGenerator {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// 새 코드와 `now + ttl` 만료 시각을 만듭니다.
    ///
    /// 표현 범위를 넘는 만료 시각은 최댓값으로 고정됩니다.
    pub fn issue(&self, now: DateTime) -> VerificationCode {
        let code = rand::rng().random_range(CODE_RANGE);
        let expires_at = now.timestamp_millis().saturating_add(self.ttl.num_milliseconds());

        VerificationCode {
            code: code.to_string(),
            expires_at: DateTime::from_millis(expires_at),
        }
    }
}
