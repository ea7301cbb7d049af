//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! `singleton_macro`의 `#[service]`, `#[repository]` 매크로가 생성하는 코드가
//! 의존하는 전역 컨테이너입니다. 매크로는 다음 항목을 이 모듈에서 찾습니다:
//!
//! - [`ServiceLocator::get`] - `Arc<T>` 필드 자동 주입
//! - [`ServiceRegistration`], [`RepositoryRegistration`] - `inventory` 등록 정보
//! - [`Service`], [`Repository`] - 매크로가 자동 구현하는 trait
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[service(name = "mail")]        → ServiceRegistration { name: "mail_service" }
//!    └─ #[repository(name = "account")]  → RepositoryRegistration { name: "account_repository" }
//!
//! 2. 애플리케이션 시작
//!    ├─ Database, RedisClient, MailTransport, LookupConfig → ServiceLocator::set()
//!    └─ ServiceLocator::initialize_all() → 모든 리포지토리/서비스 선생성
//!
//! 3. 의존성 해결
//!    ├─ 등록된 인스턴스가 있으면 그대로 반환
//!    └─ 없으면 타입 이름에서 접미사를 떼어 등록 이름과 매칭
//!       (MailService → "mail", AccountRepository → "account")
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 모든 `#[service]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름 (`{name}_service`)
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// 모든 `#[repository]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
/// 매크로가 생성하는 캐시 키 헬퍼는 [`Repository::name`]을 접두사로 사용합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름 (`{name}_repository`)
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 로직을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// `Box<Arc<T>>`를 돌려주는 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// `Box<Arc<T>>`를 돌려주는 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 정규화된 서비스 이름 → 등록정보
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    debug!("Service 이름 캐시 구성 완료: {}개", cache.len());
    cache
});

/// 정규화된 리포지토리 이름 → 등록정보
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    debug!("Repository 이름 캐시 구성 완료: {}개", cache.len());
    cache
});

/// 등록 이름에서 `_service` / `_repository` 접미사를 제거합니다.
fn extract_clean_name_static(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 싱글톤 의존성 주입 컨테이너
pub struct ServiceLocator {
    /// `TypeId`별 인스턴스 캐시
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 생성 중인 타입들 (순환 참조 감지용)
    initializing: RwLock<HashSet<TypeId>>,
}

/// 생성이 끝나거나 패닉으로 풀릴 때 초기화 표시를 제거합니다.
struct InitializingGuard(TypeId);

impl Drop for InitializingGuard {
    fn drop(&mut self) {
        LOCATOR
            .initializing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.0);
    }
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 매크로가 생성한 `new()` 안에서 `Arc<T>` 필드마다 호출됩니다.
    /// 생성자 호출 중에는 인스턴스 캐시 잠금을 잡지 않으므로
    /// 생성자가 다시 `get`을 호출해도 교착 상태에 빠지지 않습니다.
    ///
    /// # Panics
    ///
    /// - 순환 의존성이 감지된 경우
    /// - 수동 등록도, 매크로 등록도 되지 않은 타입을 요청한 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        if let Some(instance) = Self::try_get::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let mut initializing = LOCATOR
                .initializing
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        let _guard = InitializingGuard(type_id);

        let Some(instance) = Self::construct::<T>(type_name) else {
            panic!(
                "Service not found: {}. Register it with #[service] / #[repository] or ServiceLocator::set()",
                type_name
            );
        };

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
            .clone();

        match stored.downcast::<T>() {
            Ok(instance) => instance,
            Err(_) => panic!("Type mismatch in ServiceLocator for {}", type_name),
        }
    }

    /// 이미 생성되었거나 수동 등록된 인스턴스만 조회합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 타입 이름을 등록 이름과 매칭하여 인스턴스를 생성합니다.
    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Option<Arc<T>> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        let boxed_instance = if let Some(entity) = clean_type_name.strip_suffix("Repository") {
            let registration = REPOSITORY_NAME_CACHE.get(&entity.to_lowercase())?;
            (registration.constructor)()
        } else if let Some(entity) = clean_type_name.strip_suffix("Service") {
            let registration = SERVICE_NAME_CACHE.get(&entity.to_lowercase())?;
            (registration.constructor)()
        } else {
            return None;
        };

        boxed_instance.downcast::<Arc<T>>().ok().map(|instance| *instance)
    }

    /// `a::b::AccountRepository` → `AccountRepository`
    fn extract_clean_type_name(type_name: &str) -> &str {
        type_name
            .rsplit_once("::")
            .map(|(_, name)| name)
            .unwrap_or(type_name)
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 매크로로 관리되지 않는 인프라 컴포넌트(Database, RedisClient,
    /// MailTransport, LookupConfig)를 등록할 때 사용합니다.
    /// 같은 타입을 다시 등록하면 이전 인스턴스를 대체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        info!("📦 Registering: {}", Self::extract_clean_type_name(type_name));

        LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리가 먼저, 서비스가 나중에 생성됩니다.
    /// 필요한 인프라 컴포넌트는 호출 전에 [`ServiceLocator::set`]으로 등록되어 있어야 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        info!("🔄 서비스 레지스트리 초기화 시작");

        let mut repo_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ {} 생성", registration.name);
            repo_count += 1;
        }

        let mut service_count = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ {} 생성", registration.name);
            service_count += 1;
        }

        info!(
            "✅ 레지스트리 초기화 완료: 리포지토리 {}개, 서비스 {}개",
            repo_count, service_count
        );
        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct RegisteredOnly {
        value: u32,
    }

    struct NeverRegistered;

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(RegisteredOnly { value: 7 }));

        let first = ServiceLocator::get::<RegisteredOnly>();
        let second = ServiceLocator::get::<RegisteredOnly>();

        assert_eq!(first.value, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_try_get_does_not_construct() {
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }

    #[test]
    #[should_panic(expected = "Service not found")]
    fn test_get_unregistered_type_panics() {
        ServiceLocator::get::<NeverRegistered>();
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(extract_clean_name_static("mail_service"), "mail");
        assert_eq!(extract_clean_name_static("account_repository"), "account");
        assert_eq!(extract_clean_name_static("plain"), "plain");
        assert_eq!(
            ServiceLocator::extract_clean_type_name("crate::services::ViaCepService"),
            "ViaCepService"
        );
    }
}
