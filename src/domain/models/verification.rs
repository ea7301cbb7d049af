//! 이메일 인증 코드 값 객체

use std::fmt;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 발급된 인증 코드와 만료 시각
///
/// 코드와 만료 시각은 항상 함께 존재하거나 함께 없어야 하므로
/// 계정에는 `Option<VerificationCode>` 하나로만 저장합니다.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// `[1-9][0-9]{5}` 형식의 6자리 숫자 문자열
    pub code: String,
    pub expires_at: DateTime,
}

impl VerificationCode {
    /// 만료 시각과 정확히 같은 순간도 이미 만료된 것으로 봅니다.
    pub fn is_expired_at(&self, now: DateTime) -> bool {
        now >= self.expires_at
    }

    /// 바이트 단위 정확 일치만 허용합니다. 공백 제거나 숫자 변환은 하지 않습니다.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}

impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationCode")
            .field("code", &"******")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// 계정의 이메일 인증 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationState {
    /// 코드가 아직 저장되지 않은 미인증 상태 (생성 직후 과도기에만 존재)
    UnverifiedNoCode,
    /// 유효 여부와 관계없이 코드가 저장된 미인증 상태
    UnverifiedCodePending,
    /// 인증 완료. 되돌아가지 않습니다.
    Verified,
}
