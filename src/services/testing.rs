//! 서비스 테스트용 협력자 대역

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::core::errors::AppResult;
use crate::domain::entities::accounts::Account;
use crate::domain::models::PostalAddress;
use crate::repositories::accounts::{AccountStore, InMemoryAccountRepository};
use crate::services::lookups::{AddressLookup, LookupError};
use crate::services::notifications::{NotificationError, Notifier};
use crate::services::verification::Clock;

/// 보낸 코드와 환영 메일을 기록합니다.
#[derive(Default)]
pub struct RecordingNotifier {
    codes: Mutex<Vec<(String, String)>>,
    validity: Mutex<Vec<chrono::Duration>>,
    welcomes: Mutex<Vec<(String, String)>>,
    failing: AtomicBool,
}

impl RecordingNotifier {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }

    /// 마지막 인증 메일에 안내된 유효 시간
    pub fn last_validity(&self) -> Option<chrono::Duration> {
        self.validity.lock().unwrap_or_else(PoisonError::into_inner).last().copied()
    }

    pub fn codes_sent(&self) -> usize {
        self.codes.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn welcomes_sent(&self) -> usize {
        self.welcomes.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn check(&self) -> Result<(), NotificationError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(NotificationError::InvalidAddress("smtp down".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        valid_for: chrono::Duration,
    ) -> Result<(), NotificationError> {
        self.check()?;
        self.validity
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(valid_for);
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((email.to_string(), code.to_string()));
        Ok(())
    }

    async fn send_welcome(&self, email: &str, name: &str) -> Result<(), NotificationError> {
        self.check()?;
        self.welcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((email.to_string(), name.to_string()));
        Ok(())
    }
}

/// 미리 정한 결과를 돌려주는 주소 조회기
#[derive(Default)]
pub struct StubAddressLookup {
    response: Mutex<Option<Result<PostalAddress, LookupError>>>,
    calls: AtomicUsize,
}

impl StubAddressLookup {
    pub fn respond_with(&self, response: Result<PostalAddress, LookupError>) {
        *self.response.lock().unwrap_or_else(PoisonError::into_inner) = Some(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressLookup for StubAddressLookup {
    async fn resolve_address(&self, _postal_code: &str) -> Result<PostalAddress, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(|| Err(LookupError::Unavailable("no stubbed response".to_string())))
    }
}

/// 직접 움직이는 시계
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn at(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime {
        DateTime::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

/// 오래된 읽기를 흉내 내는 저장소
///
/// - `serve_once`: 다음 `load_for_update` 한 번만 지정한 스냅샷을 돌려줍니다 (동시 요청 경쟁).
/// - `pin_cached`: 이후 모든 `find_by_id`가 지정한 스냅샷을 돌려줍니다 (오래된 캐시 항목).
pub struct StaleReadStore {
    inner: Arc<InMemoryAccountRepository>,
    stale: Mutex<Option<Account>>,
    cached: Mutex<Option<Account>>,
}

impl StaleReadStore {
    pub fn new(inner: Arc<InMemoryAccountRepository>) -> Self {
        Self {
            inner,
            stale: Mutex::new(None),
            cached: Mutex::new(None),
        }
    }

    pub fn serve_once(&self, snapshot: Account) {
        *self.stale.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
    }

    pub fn pin_cached(&self, snapshot: Account) {
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
    }
}

#[async_trait]
impl AccountStore for StaleReadStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner).clone();
        match cached {
            Some(snapshot) => Ok(Some(snapshot)),
            None => self.inner.find_by_id(id).await,
        }
    }

    async fn load_for_update(&self, id: &str) -> AppResult<Option<Account>> {
        let stale = self.stale.lock().unwrap_or_else(PoisonError::into_inner).take();
        match stale {
            Some(snapshot) => Ok(Some(snapshot)),
            None => self.inner.load_for_update(id).await,
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.inner.find_by_email(email).await
    }

    async fn find_by_email_or_phone(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> AppResult<Option<Account>> {
        self.inner.find_by_email_or_phone(email, phone).await
    }

    async fn insert(&self, account: Account) -> AppResult<Account> {
        self.inner.insert(account).await
    }

    async fn save(&self, account: Account) -> AppResult<Account> {
        self.inner.save(account).await
    }
}
