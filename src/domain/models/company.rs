//! 기업 등록번호(CNPJ) 조회 모델

use serde::{Deserialize, Serialize};

/// CNPJ.ws 공개 API 응답 중 사용하는 부분
#[derive(Debug, Clone, Deserialize)]
pub struct CnpjWsCompany {
    #[serde(default)]
    pub razao_social: Option<String>,
    #[serde(default)]
    pub nome_fantasia: Option<String>,
    #[serde(default)]
    pub capital_social: Option<String>,
    #[serde(default)]
    pub estabelecimento: Option<CnpjWsEstablishment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CnpjWsEstablishment {
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub nome_fantasia: Option<String>,
    #[serde(default)]
    pub situacao_cadastral: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub estado: Option<CnpjWsState>,
    #[serde(default)]
    pub cidade: Option<CnpjWsCity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CnpjWsState {
    #[serde(default)]
    pub sigla: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CnpjWsCity {
    #[serde(default)]
    pub nome: Option<String>,
}

/// 클라이언트에 돌려주는 기업 요약 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// 숫자 14자리로 정규화된 CNPJ
    pub cnpj: String,
    pub legal_name: String,
    pub trade_name: Option<String>,
    pub share_capital: Option<String>,
    pub registration_status: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl CompanyProfile {
    pub fn from_cnpj_ws(cnpj: String, raw: CnpjWsCompany) -> Self {
        let establishment = raw.estabelecimento;
        let field = |pick: fn(&CnpjWsEstablishment) -> Option<String>| {
            establishment.as_ref().and_then(pick)
        };

        Self {
            trade_name: raw
                .nome_fantasia
                .or_else(|| field(|e| e.nome_fantasia.clone())),
            registration_status: field(|e| e.situacao_cadastral.clone()),
            street: field(|e| e.logradouro.clone()),
            number: field(|e| e.numero.clone()),
            neighborhood: field(|e| e.bairro.clone()),
            city: field(|e| e.cidade.as_ref().and_then(|c| c.nome.clone())),
            state: field(|e| e.estado.as_ref().and_then(|s| s.sigla.clone())),
            postal_code: field(|e| e.cep.clone()),
            cnpj,
            legal_name: raw.razao_social.unwrap_or_default(),
            share_capital: raw.capital_social,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cnpj_ws_flattens_establishment() {
        let raw: CnpjWsCompany = serde_json::from_str(
            r#"{
                "razao_social": "BANCO DO BRASIL SA",
                "nome_fantasia": null,
                "capital_social": "90000000000.00",
                "estabelecimento": {
                    "cnpj": "00000000000191",
                    "nome_fantasia": "DIRECAO GERAL",
                    "situacao_cadastral": "Ativa",
                    "logradouro": "SAUN QUADRA 5 LOTE B",
                    "numero": "S/N",
                    "bairro": "ASA NORTE",
                    "cep": "70040912",
                    "estado": { "id": 7, "nome": "Distrito Federal", "sigla": "DF", "ibge_id": 53 },
                    "cidade": { "id": 1, "nome": "Brasília", "ibge_id": 5300108, "siafi_id": "9701" }
                }
            }"#,
        )
        .unwrap();

        let profile = CompanyProfile::from_cnpj_ws("00000000000191".to_string(), raw);

        assert_eq!(profile.legal_name, "BANCO DO BRASIL SA");
        assert_eq!(profile.trade_name.as_deref(), Some("DIRECAO GERAL"));
        assert_eq!(profile.state.as_deref(), Some("DF"));
        assert_eq!(profile.city.as_deref(), Some("Brasília"));
        assert_eq!(profile.registration_status.as_deref(), Some("Ativa"));
    }
}
