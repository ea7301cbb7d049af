//! 이메일/전화번호 사용 가능 여부 조회 쿼리
//!
//! `GET /users/validate?email=ana@x.com&phone=11999999999`

use serde::Deserialize;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
}

impl AvailabilityQuery {
    /// 두 조건이 모두 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_count_as_absent() {
        let query: AvailabilityQuery = serde_json::from_str(r#"{"email": "  ", "phone": ""}"#).unwrap();
        assert!(query.is_empty());

        let query: AvailabilityQuery = serde_json::from_str(r#"{"phone": " 11999999999 "}"#).unwrap();
        assert!(!query.is_empty());
        assert_eq!(query.phone.as_deref(), Some("11999999999"));
    }
}
