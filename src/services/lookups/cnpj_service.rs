//! CNPJ.ws 기업 정보 조회 서비스
//!
//! 공개 API는 분당 요청 수가 제한되어 있어 429를 그대로 호출자에게 알립니다.

use std::sync::Arc;
use reqwest::StatusCode;
use singleton_macro::service;
use crate::config::LookupConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::{CnpjWsCompany, CompanyProfile};
use crate::utils::string_utils::digits_only;

const CNPJ_DIGITS: usize = 14;

#[service(name = "cnpj")]
pub struct CnpjService {
    config: Arc<LookupConfig>,
    http: reqwest::Client,
}

impl CnpjService {
    pub fn with_config(config: LookupConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }

    /// CNPJ로 기업 정보를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 숫자만 남겼을 때 14자리가 아닌 경우
    /// * `NotFound` - 등록되지 않은 CNPJ
    /// * `UpstreamRateLimited` - 조회 한도 초과
    /// * `ExternalServiceError` - 그 밖의 실패
    pub async fn lookup_company(&self, cnpj: &str) -> AppResult<CompanyProfile> {
        let digits = digits_only(cnpj);
        if digits.len() != CNPJ_DIGITS {
            return Err(AppError::ValidationError(format!(
                "CNPJ는 14자리 숫자여야 합니다: {}",
                cnpj
            )));
        }

        let url = format!("{}/{}", self.config.cnpj_base_url, digits);

        let response = self.http
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                log::error!("CNPJ 조회 요청 실패: {}", e);
                AppError::ExternalServiceError(format!("CNPJ 조회 요청 실패: {}", e))
            })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(AppError::NotFound(format!("CNPJ를 찾을 수 없습니다: {}", digits)));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                log::warn!("CNPJ 조회 한도 초과");
                return Err(AppError::UpstreamRateLimited(
                    "CNPJ 조회 한도를 초과했습니다. 잠시 후 다시 시도하세요".to_string(),
                ));
            }
            status => {
                log::error!("CNPJ 조회 응답 오류: {}", status);
                return Err(AppError::ExternalServiceError(format!(
                    "CNPJ 조회 실패: {}",
                    status
                )));
            }
        }

        let raw = response
            .json::<CnpjWsCompany>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("CNPJ 응답 파싱 실패: {}", e)))?;

        Ok(CompanyProfile::from_cnpj_ws(digits, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(server: &MockServer) -> CnpjService {
        CnpjService::with_config(LookupConfig::with_base_urls(server.uri(), server.uri()))
    }

    #[actix_web::test]
    async fn test_lookup_company_from_masked_cnpj() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/11222333000181"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "razao_social": "ACME LTDA",
                "capital_social": "1000.00",
                "estabelecimento": {
                    "cnpj": "11222333000181",
                    "nome_fantasia": "Acme",
                    "situacao_cadastral": "Ativa",
                    "logradouro": "Rua A",
                    "numero": "10",
                    "bairro": "Centro",
                    "cep": "01001000",
                    "estado": { "sigla": "SP" },
                    "cidade": { "nome": "São Paulo" }
                }
            })))
            .mount(&server)
            .await;

        let company = service_for(&server).lookup_company("11.222.333/0001-81").await.unwrap();

        assert_eq!(company.cnpj, "11222333000181");
        assert_eq!(company.legal_name, "ACME LTDA");
        assert_eq!(company.trade_name.as_deref(), Some("Acme"));
        assert_eq!(company.state.as_deref(), Some("SP"));
        assert_eq!(company.city.as_deref(), Some("São Paulo"));
    }

    #[actix_web::test]
    async fn test_status_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/00000000000000"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/11111111111111"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/22222222222222"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let service = service_for(&server);

        assert!(matches!(
            service.lookup_company("00000000000000").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.lookup_company("11111111111111").await,
            Err(AppError::UpstreamRateLimited(_))
        ));
        assert!(matches!(
            service.lookup_company("22222222222222").await,
            Err(AppError::ExternalServiceError(_))
        ));
    }

    #[actix_web::test]
    async fn test_short_cnpj_is_validation_error() {
        let server = MockServer::start().await;

        let result = service_for(&server).lookup_company("123").await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
