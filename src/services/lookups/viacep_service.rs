//! ViaCEP 주소 조회 서비스
//!
//! `GET {base}/{cep}/json`을 호출합니다. 존재하지 않는 CEP에도 200과 함께
//! `{"erro": true}`를 돌려주므로 본문까지 확인해야 합니다.

use std::sync::Arc;
use async_trait::async_trait;
use reqwest::StatusCode;
use singleton_macro::service;
use crate::config::LookupConfig;
use crate::domain::models::{PostalAddress, ViaCepAddress};
use crate::utils::string_utils::digits_only;
use super::{AddressLookup, LookupError};

const CEP_DIGITS: usize = 8;

#[service(name = "viacep")]
pub struct ViaCepService {
    config: Arc<LookupConfig>,
    http: reqwest::Client,
}

impl ViaCepService {
    pub fn with_config(config: LookupConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AddressLookup for ViaCepService {
    async fn resolve_address(&self, postal_code: &str) -> Result<PostalAddress, LookupError> {
        let cep = digits_only(postal_code);
        if cep.len() != CEP_DIGITS {
            return Err(LookupError::InvalidInput(postal_code.to_string()));
        }

        let url = format!("{}/{}/json", self.config.viacep_base_url, cep);
        log::debug!("ViaCEP 조회: {}", url);

        let response = self.http
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                log::error!("ViaCEP 요청 실패: {}", e);
                LookupError::Unavailable(e.to_string())
            })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::TOO_MANY_REQUESTS => return Err(LookupError::RateLimited),
            status => {
                log::error!("ViaCEP 응답 오류: {}", status);
                return Err(LookupError::Unavailable(format!("ViaCEP responded {}", status)));
            }
        }

        let raw = response
            .json::<ViaCepAddress>()
            .await
            .map_err(|e| LookupError::Unavailable(format!("ViaCEP 응답 파싱 실패: {}", e)))?;

        if raw.is_error() {
            return Err(LookupError::NotFound(cep));
        }

        Ok(PostalAddress::from_viacep(cep, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn service_for(server: &MockServer) -> ViaCepService {
        ViaCepService::with_config(LookupConfig::with_base_urls(server.uri(), server.uri()))
    }

    #[actix_web::test]
    async fn test_resolves_address_from_masked_cep() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/01001000/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cep": "01001-000",
                "logradouro": "Praça da Sé",
                "bairro": "Sé",
                "localidade": "São Paulo",
                "uf": "SP"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let address = service_for(&server).await.resolve_address("01001-000").await.unwrap();

        assert_eq!(address.postal_code, "01001000");
        assert_eq!(address.street, "Praça da Sé");
        assert_eq!(address.neighborhood, "Sé");
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.state, "SP");
    }

    #[actix_web::test]
    async fn test_error_body_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/99999999/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": true })))
            .mount(&server)
            .await;

        let result = service_for(&server).await.resolve_address("99999999").await;

        assert_eq!(result, Err(LookupError::NotFound("99999999".to_string())));
    }

    #[actix_web::test]
    async fn test_server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = service_for(&server).await.resolve_address("01001000").await;

        assert!(matches!(result, Err(LookupError::Unavailable(_))));
    }

    #[actix_web::test]
    async fn test_undecodable_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = service_for(&server).await.resolve_address("01001000").await;

        assert!(matches!(result, Err(LookupError::Unavailable(_))));
    }

    #[actix_web::test]
    async fn test_malformed_cep_is_rejected_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = service_for(&server).await.resolve_address("1234").await;

        assert_eq!(result, Err(LookupError::InvalidInput("1234".to_string())));
    }
}
