//! 계정 관련 요청 DTO
//!
//! 모든 요청 DTO는 `validator::Validate`를 구현하며, 핸들러에서
//! 워크플로우를 호출하기 전에 검증합니다. 실패하면 `ValidationError`(400)입니다.

pub mod create_account;
pub mod verify_email;
pub mod resend_code;
pub mod update_account;
pub mod availability_query;

pub use create_account::CreateAccountRequest;
pub use verify_email::VerifyEmailRequest;
pub use resend_code::ResendCodeRequest;
pub use update_account::UpdateAccountRequest;
pub use availability_query::AvailabilityQuery;

use validator::ValidationError;

/// 공백만 있는 문자열을 거부합니다.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("빈 값일 수 없습니다".into()));
    }
    Ok(())
}
