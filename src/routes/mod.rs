//! # 라우트 설정
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/health` | [`health_check`] |
//! | POST | `/users` | 가입 |
//! | GET | `/users/validate` | 이메일/전화번호 사용 가능 여부 |
//! | POST | `/users/resend-verification` | 인증 코드 재발송 |
//! | GET | `/users/address/{cep}` | 주소 조회 |
//! | GET | `/users/company/{cnpj}` | 기업 정보 조회 |
//! | POST | `/users/{id}/verify-email` | 이메일 인증 |
//! | PUT | `/users/{id}` | 프로필 수정 |
//! | GET | `/users/{id}` | 계정 조회 |
//!
//! `/users/{id}`는 고정 경로보다 뒤에 등록해야 `validate` 등이 ID로 잡히지 않습니다.

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::config::{Environment, StorageConfig};
use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 본문/쿼리 파싱 실패도 같은 에러 형식으로
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    cfg.service(health_check);

    configure_account_routes(cfg);
}

fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::accounts::create_account)
            .service(handlers::accounts::check_availability)
            .service(handlers::accounts::resend_verification_code)
            .service(handlers::lookups::lookup_address)
            .service(handlers::lookups::lookup_company)
            .service(handlers::accounts::verify_email)
            .service(handlers::accounts::update_account)
            .service(handlers::accounts::get_account)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_registration",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": Environment::current().as_str(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "store": StorageConfig::backend().as_str(),
            "dependency_injection": "Singleton Macro"
        }
    }))
}
