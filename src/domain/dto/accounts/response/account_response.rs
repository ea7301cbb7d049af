//! 계정 응답 DTO
//!
//! 인증 코드와 만료 시각은 어떤 경우에도 [`AccountResponse`]에 포함되지 않습니다.
//! 코드 노출 정책이 켜진 경우에만 생성/재발송 응답에 별도 필드로 실립니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::accounts::Account;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub email_verified: bool,
    pub secondary_email: Option<String>,
    pub cnpj: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

fn rfc3339(value: DateTime) -> String {
    value
        .try_to_rfc3339_string()
        .unwrap_or_else(|_| value.timestamp_millis().to_string())
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            name,
            email,
            phone,
            email_verified,
            secondary_email,
            cnpj,
            street,
            number,
            neighborhood,
            city,
            state,
            postal_code,
            latitude,
            longitude,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id: id.to_hex(),
            name,
            email,
            phone,
            email_verified,
            secondary_email,
            cnpj,
            street,
            number,
            neighborhood,
            city,
            state,
            postal_code,
            latitude,
            longitude,
            created_at: rfc3339(created_at),
            updated_at: rfc3339(updated_at),
        }
    }
}

/// `POST /users` 응답 (201)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    #[serde(flatten)]
    pub account: AccountResponse,
    /// 코드 노출 정책이 켜진 경우에만 포함
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
}

/// `POST /users/resend-verification` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendCodeResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
}

/// `GET /users/validate` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}
