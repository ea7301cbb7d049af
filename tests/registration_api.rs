//! HTTP 전체 흐름 테스트
//!
//! 메모리 저장소, 로그 메일 전송, wiremock ViaCEP/CNPJ.ws를 사용합니다.

use std::sync::Arc;
use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use user_registration_backend::config::{LookupConfig, RegistrationPolicy};
use user_registration_backend::repositories::accounts::InMemoryAccountRepository;
use user_registration_backend::routes::configure_all_routes;
use user_registration_backend::services::accounts::AccountService;
use user_registration_backend::services::lookups::{CnpjService, ViaCepService};
use user_registration_backend::services::notifications::{MailService, MailTransport};
use user_registration_backend::services::verification::SystemClock;

async fn lookup_server() -> MockServer {
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
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/99999999/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": true })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/11222333000181"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "razao_social": "ACME LTDA",
            "estabelecimento": { "nome_fantasia": "Acme", "estado": { "sigla": "SP" } }
        })))
        .mount(&server)
        .await;

    server
}

fn services(server: &MockServer, policy: RegistrationPolicy) -> (web::Data<AccountService>, web::Data<CnpjService>) {
    let lookup_config = LookupConfig::with_base_urls(server.uri(), server.uri());

    let account_service = AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(MailService::with_transport(MailTransport::log("noreply@example.com"))),
        Arc::new(ViaCepService::with_config(lookup_config.clone())),
        Arc::new(SystemClock),
        policy,
    );

    (
        web::Data::new(account_service),
        web::Data::new(CnpjService::with_config(lookup_config)),
    )
}

fn demo_policy() -> RegistrationPolicy {
    RegistrationPolicy {
        expose_code_in_response: true,
        ..RegistrationPolicy::default()
    }
}

macro_rules! app {
    ($server:expr, $policy:expr) => {{
        let (accounts, cnpj) = services($server, $policy);
        test::init_service(
            App::new()
                .app_data(accounts)
                .app_data(cnpj)
                .configure(configure_all_routes),
        )
        .await
    }};
}

fn ana() -> Value {
    json!({ "name": "Ana", "email": "ana@x.com", "phone": "11999999999" })
}

#[actix_web::test]
async fn test_registration_and_verification_flow() {
    let server = lookup_server().await;
    let app = app!(&server, demo_policy());

    // 가입
    let req = test::TestRequest::post().uri("/users").set_json(ana()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["emailVerified"], false);
    let id = created["id"].as_str().unwrap().to_string();
    let code = created["verificationCode"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);

    // 같은 연락처로 다시 가입
    let req = test::TestRequest::post().uri("/users").set_json(ana()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "DUPLICATE_CONTACT");

    // 틀린 코드
    let wrong = if code == "999999" { "100000" } else { "999999" };
    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/verify-email", id))
        .set_json(json!({ "code": wrong }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "CODE_MISMATCH");

    // 맞는 코드
    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/verify-email", id))
        .set_json(json!({ "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let verified: Value = test::read_body_json(resp).await;
    assert_eq!(verified["emailVerified"], true);

    // 재사용
    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/verify-email", id))
        .set_json(json!({ "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "ALREADY_VERIFIED");

    // 인증 후 재발송 거부
    let req = test::TestRequest::post()
        .uri("/users/resend-verification")
        .set_json(json!({ "email": "ana@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_resend_returns_new_code_when_exposed() {
    let server = lookup_server().await;
    let app = app!(&server, demo_policy());

    let req = test::TestRequest::post().uri("/users").set_json(ana()).to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/users/resend-verification")
        .set_json(json!({ "email": "ana@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resent: Value = test::read_body_json(resp).await;
    let new_code = resent["verificationCode"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/verify-email", id))
        .set_json(json!({ "code": new_code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_code_is_hidden_by_default() {
    let server = lookup_server().await;
    let app = app!(&server, RegistrationPolicy::default());

    let req = test::TestRequest::post().uri("/users").set_json(ana()).to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    assert!(created.get("verificationCode").is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", created["id"].as_str().unwrap()))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["email"], "ana@x.com");
    assert!(fetched.get("verificationCode").is_none());
}

#[actix_web::test]
async fn test_availability_endpoint() {
    let server = lookup_server().await;
    let app = app!(&server, demo_policy());

    let req = test::TestRequest::post().uri("/users").set_json(ana()).to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/users/validate?email=ana@x.com").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["available"], false);

    let req = test::TestRequest::get()
        .uri("/users/validate?email=new@x.com&phone=21988887777")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["available"], true);

    let req = test::TestRequest::get().uri("/users/validate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "MISSING_CRITERIA");
}

#[actix_web::test]
async fn test_update_with_postal_code_enriches_address() {
    let server = lookup_server().await;
    let app = app!(&server, demo_policy());

    let req = test::TestRequest::post().uri("/users").set_json(ana()).to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/users/{}", id))
        .set_json(json!({ "zipCode": "01001-000", "number": "100", "street": "Rua Errada" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["street"], "Praça da Sé");
    assert_eq!(updated["city"], "São Paulo");
    assert_eq!(updated["state"], "SP");
    assert_eq!(updated["number"], "100");

    // 존재하지 않는 CEP는 아무것도 바꾸지 않는다
    let req = test::TestRequest::put()
        .uri(&format!("/users/{}", id))
        .set_json(json!({ "postalCode": "99999-999", "number": "200" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "POSTAL_CODE_NOT_FOUND");

    let req = test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["number"], "100");
}

#[actix_web::test]
async fn test_invalid_requests_are_rejected() {
    let server = lookup_server().await;
    let app = app!(&server, demo_policy());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "Ana", "email": "not-an-email", "phone": "1199" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "VALIDATION_ERROR");

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "Ana" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/users/not-an-id").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_lookup_endpoints() {
    let server = lookup_server().await;
    let app = app!(&server, demo_policy());

    let req = test::TestRequest::get().uri("/users/address/01001-000").to_request();
    let address: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(address["postalCode"], "01001000");
    assert_eq!(address["neighborhood"], "Sé");

    let req = test::TestRequest::get().uri("/users/company/11222333000181").to_request();
    let company: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(company["legalName"], "ACME LTDA");
    assert_eq!(company["tradeName"], "Acme");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
