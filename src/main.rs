//! 사용자 가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! `ACCOUNT_STORE`에 따라 MongoDB + Redis 또는 메모리 저장소를 사용합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};
use user_registration_backend::caching::redis::RedisClient;
use user_registration_backend::config::{
    Environment, LookupConfig, MailConfig, RegistrationPolicy, ServerConfig, StorageBackend,
    StorageConfig,
};
use user_registration_backend::core::registry::ServiceLocator;
use user_registration_backend::db::Database;
use user_registration_backend::repositories::accounts::{
    AccountRepository, AccountStore, InMemoryAccountRepository,
};
use user_registration_backend::routes::configure_all_routes;
use user_registration_backend::services::accounts::AccountService;
use user_registration_backend::services::lookups::{CnpjService, ViaCepService};
use user_registration_backend::services::notifications::{MailService, MailTransport};
use user_registration_backend::services::verification::SystemClock;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => warn!("환경 파일 로드 실패: {}", e),
    }

    info!("🚀 사용자 가입 서비스 시작중... ({})", Environment::current().as_str());

    // 매크로 서비스들이 주입받는 설정/전송 수단
    ServiceLocator::set(Arc::new(LookupConfig::from_env()));
    let transport = MailTransport::from_config(&MailConfig::from_env())
        .map_err(|e| io::Error::other(format!("메일 전송 설정 실패: {}", e)))?;
    ServiceLocator::set(Arc::new(transport));

    let store = initialize_account_store().await?;
    let policy = RegistrationPolicy::from_env();
    info!(
        "📋 가입 정책: code_ttl={}분, expose_code={}, require_verified_for_update={}",
        policy.code_ttl.num_minutes(),
        policy.expose_code_in_response,
        policy.require_verified_for_update
    );

    let account_service = web::Data::new(AccountService::new(
        store,
        MailService::instance(),
        ViaCepService::instance(),
        Arc::new(SystemClock),
        policy,
    ));
    let cnpj_service = web::Data::from(CnpjService::instance());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(account_service, cnpj_service).await
}

async fn start_http_server(
    account_service: web::Data<AccountService>,
    cnpj_service: web::Data<CnpjService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(account_service.clone())
            .app_data(cnpj_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(4)
        .run()
        .await
}

/// `PROFILE`에 맞는 환경 파일을 읽습니다.
///
/// 로거가 아직 없으므로 결과는 호출자가 초기화 후에 남깁니다.
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

async fn initialize_account_store() -> io::Result<Arc<dyn AccountStore>> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중: 재시작하면 모든 계정이 사라집니다");
            Ok(Arc::new(InMemoryAccountRepository::new()))
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new()
                .await
                .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;
            let redis_client = RedisClient::new()
                .await
                .map_err(|e| io::Error::other(format!("Redis 연결 실패: {}", e)))?;

            ServiceLocator::set(Arc::new(database));
            ServiceLocator::set(Arc::new(redis_client));

            ServiceLocator::initialize_all()
                .await
                .map_err(|e| io::Error::other(format!("서비스 초기화 실패: {}", e)))?;

            let repository = AccountRepository::instance();
            repository
                .create_indexes()
                .await
                .map_err(|e| io::Error::other(e.to_string()))?;

            Ok(repository)
        }
    }
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
