//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 계정 저장소 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from(
            env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "production".to_string())
                .as_str(),
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl From<&str> for Environment {
    /// 대소문자 무관. 알 수 없는 값은 `Production`으로 취급합니다.
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        super::env_parsed("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 계정 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB + Redis 캐시
    Mongo,
    /// 프로세스 내부 메모리 (로컬 실행/테스트용)
    Memory,
}

impl From<&str> for StorageBackend {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Mongo => "mongo",
            StorageBackend::Memory => "memory",
        }
    }
}

/// 저장소 연결 설정
pub struct StorageConfig;

impl StorageConfig {
    /// `ACCOUNT_STORE` (기본값: mongo)
    pub fn backend() -> StorageBackend {
        env::var("ACCOUNT_STORE")
            .map(|raw| StorageBackend::from(raw.as_str()))
            .unwrap_or(StorageBackend::Mongo)
    }

    /// `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// `DATABASE_NAME` (기본값: "user_registration")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_registration".to_string())
    }

    /// `REDIS_URL` (기본값: "redis://localhost:6379")
    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}
