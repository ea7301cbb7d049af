//! 계정 데이터 액세스 계층
//!
//! 워크플로우는 [`AccountStore`] 트레이트에만 의존합니다.
//!
//! | 구현체 | 선택 | 용도 |
//! |--------|------|------|
//! | [`AccountRepository`](account_repo::AccountRepository) | `ACCOUNT_STORE=mongo` | MongoDB + Redis 캐시 |
//! | [`InMemoryAccountRepository`](memory_account_repo::InMemoryAccountRepository) | `ACCOUNT_STORE=memory` | 로컬 실행, 테스트 |
//!
//! 두 구현 모두 저장 계층에서 email/phone 유일성과 버전 검사를 보장합니다.
//! 애플리케이션의 사전 중복 확인만으로는 동시 가입 경쟁을 막을 수 없기 때문입니다.

pub mod account_repo;
pub mod memory_account_repo;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::accounts::Account;

pub use account_repo::AccountRepository;
pub use memory_account_repo::InMemoryAccountRepository;

/// 계정 저장소 계약
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// ID로 계정을 조회합니다. 해석할 수 없는 ID는 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;

    /// 수정 직전에 쓰는 ID 조회. 캐시를 거치지 않은 최신 상태를 돌려줍니다.
    ///
    /// 캐시가 없는 저장소는 `find_by_id`와 같습니다.
    async fn load_for_update(&self, id: &str) -> AppResult<Option<Account>> {
        self.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// 주어진 email 또는 phone 중 하나라도 일치하는 계정을 찾습니다 (OR 조건).
    ///
    /// 둘 다 `None`이면 항상 `Ok(None)`입니다.
    async fn find_by_email_or_phone(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> AppResult<Option<Account>>;

    /// 새 계정을 저장합니다.
    ///
    /// email 또는 phone이 이미 사용 중이면 `DuplicateContact`를 반환합니다.
    async fn insert(&self, account: Account) -> AppResult<Account>;

    /// 기존 계정을 교체 저장합니다.
    ///
    /// 저장된 버전이 `account.version`과 다르면 `ConcurrentModification`을 반환하고,
    /// 성공하면 버전이 1 증가한 계정을 돌려줍니다.
    async fn save(&self, account: Account) -> AppResult<Account>;
}
