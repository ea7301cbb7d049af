//! # 프로필 수정 요청 DTO
//!
//! 모든 필드는 선택입니다. 빠진 필드(또는 빈 문자열)는 기존 값을 유지합니다.
//! `postalCode`(별칭 `zipCode`)가 있으면 주소 조회 결과가
//! street/neighborhood/city/state를 결정합니다.
//!
//! ```json
//! {
//!   "secondaryEmail": "ana.work@x.com",
//!   "cnpj": "00.000.000/0001-91",
//!   "number": "100",
//!   "zipCode": "01001-000",
//!   "latitude": -23.55,
//!   "longitude": -46.63
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::accounts::ProfileChanges;
use crate::utils::string_utils::{deserialize_optional_string, is_cnpj_format, is_postal_code_format};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 보조 이메일 주소를 입력해주세요"))]
    pub secondary_email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_cnpj"))]
    pub cnpj: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 200))]
    pub street: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 20))]
    pub number: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 120))]
    pub neighborhood: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 120))]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(equal = 2, message = "주 코드는 2글자여야 합니다"))]
    pub state: Option<String>,

    #[serde(default, alias = "zipCode", deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_postal_code"))]
    pub postal_code: Option<String>,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0, message = "위도는 -90에서 90 사이여야 합니다"))]
    pub latitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0, message = "경도는 -180에서 180 사이여야 합니다"))]
    pub longitude: Option<f64>,
}

fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    if !is_cnpj_format(value) {
        return Err(ValidationError::new("cnpj")
            .with_message("CNPJ는 99.999.999/9999-99 형식 또는 숫자 14자리여야 합니다".into()));
    }
    Ok(())
}

fn validate_postal_code(value: &str) -> Result<(), ValidationError> {
    if !is_postal_code_format(value) {
        return Err(ValidationError::new("postal_code")
            .with_message("CEP는 99999-999 또는 99999999 형식이어야 합니다".into()));
    }
    Ok(())
}

impl UpdateAccountRequest {
    pub fn into_changes(self) -> ProfileChanges {
        ProfileChanges {
            secondary_email: self.secondary_email,
            cnpj: self.cnpj,
            street: self.street,
            number: self.number,
            neighborhood: self.neighborhood,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
