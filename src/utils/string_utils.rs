//! # 문자열 유틸리티
//!
//! 요청 값 정리와 브라질 식별자(CEP, CNPJ) 형식 검사에 쓰는 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 앞뒤 공백을 제거하고, 비어 있으면 `ValidationError`를 돌려줍니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 공백만 있는 문자열은 `None`으로 취급합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde 필드용: `"  Alice  "` → `Some("Alice")`, `""`/`null` → `None`
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 숫자만 남깁니다. `"01001-000"` → `"01001000"`
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `99999-999` 또는 `99999999`
pub fn is_postal_code_format(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.len() {
        8 => bytes.iter().all(u8::is_ascii_digit),
        9 => {
            bytes[5] == b'-'
                && bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// `99.999.999/9999-99` 또는 숫자 14자리
pub fn is_cnpj_format(value: &str) -> bool {
    const MASK: &[u8] = b"##.###.###/####-##";

    let bytes = value.as_bytes();
    if bytes.len() == 14 {
        return bytes.iter().all(u8::is_ascii_digit);
    }

    bytes.len() == MASK.len()
        && bytes.iter().zip(MASK).all(|(c, m)| match *m {
            b'#' => c.is_ascii_digit(),
            _ => c == m,
        })
}
