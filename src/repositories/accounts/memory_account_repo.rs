//! 프로세스 내 메모리 계정 저장소
//!
//! 유일성 검사와 버전 검사를 하나의 쓰기 락 안에서 수행하므로
//! 동시 가입/동시 인증 경쟁에서도 한 요청만 성공합니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::accounts::Account;
use super::AccountStore;

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<ObjectId, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(accounts.get(&object_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_email_or_phone(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(accounts
            .values()
            .find(|a| {
                email.is_some_and(|email| a.email == email)
                    || phone.is_some_and(|phone| a.phone == phone)
            })
            .cloned())
    }

    async fn insert(&self, account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);

        let taken = accounts
            .values()
            .any(|a| a.email == account.email || a.phone == account.phone);
        if taken || accounts.contains_key(&account.id) {
            return Err(AppError::DuplicateContact(
                "이미 사용 중인 이메일 또는 전화번호입니다".to_string(),
            ));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn save(&self, account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);

        let stored_version = accounts.get(&account.id).map(|stored| stored.version);
        if stored_version != Some(account.version) {
            return Err(AppError::ConcurrentModification(format!(
                "계정이 다른 요청에 의해 변경되었습니다: {}",
                account.id_hex()
            )));
        }

        let next = Account {
            version: account.version + 1,
            ..account
        };
        accounts.insert(next.id, next.clone());
        Ok(next)
    }
}
