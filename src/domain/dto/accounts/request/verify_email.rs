//! 이메일 인증 요청 DTO (`{ "code": "482913" }`)

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    /// 비교는 바이트 단위로 하므로 공백을 제거하지 않습니다.
    #[validate(length(equal = 6, message = "인증 코드는 6자리여야 합니다"))]
    pub code: String,
}
