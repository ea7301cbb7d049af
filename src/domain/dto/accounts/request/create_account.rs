//! # 계정 생성 요청 DTO
//!
//! ```json
//! { "name": "Ana", "email": "ana@x.com", "phone": "11999999999" }
//! ```
//!
//! 중복 여부는 서비스 계층과 저장소 유니크 인덱스에서 검사합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use super::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 120, message = "이름은 120자 이하여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 32, message = "전화번호는 32자 이하여야 합니다"))]
    pub phone: String,
}
