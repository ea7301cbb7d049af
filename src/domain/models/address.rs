//! 우편번호(CEP) 조회 모델

use serde::{Deserialize, Serialize};

/// ViaCEP `/{cep}/json` 응답 원본
///
/// 존재하지 않는 CEP에 대해서는 HTTP 200과 함께 `{"erro": true}`를 돌려주며,
/// 최근 버전은 `"erro": "true"` 문자열로 응답하기도 합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct ViaCepAddress {
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub localidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
}

impl ViaCepAddress {
    pub fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

/// 주소 조회 결과
///
/// 계정에 병합될 때 네 개의 주소 필드(street, neighborhood, city, state)는
/// 항상 이 값 하나에서 함께 기록됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    /// 숫자 8자리로 정규화된 CEP
    pub postal_code: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl PostalAddress {
    pub fn from_viacep(postal_code: String, raw: ViaCepAddress) -> Self {
        Self {
            postal_code,
            street: raw.logradouro.unwrap_or_default(),
            neighborhood: raw.bairro.unwrap_or_default(),
            city: raw.localidade.unwrap_or_default(),
            state: raw.uf.unwrap_or_default(),
        }
    }
}
