//! # 계정 가입 워크플로우 서비스
//!
//! 가입, 이메일 인증, 코드 재발송, 프로필 수정, 연락처 중복 확인을 조율합니다.
//!
//! ## 인증 상태 전이
//!
//! ```text
//!   create ──▶ Unverified-CodePending ──verify──▶ Verified (종료)
//!                     ▲        │
//!                     └resend──┘
//! ```
//!
//! ## 협력자
//!
//! | 필드 | 계약 | 실패 시 |
//! |------|------|---------|
//! | `store` | [`AccountStore`] | `DatabaseError`, `DuplicateContact`, `ConcurrentModification` |
//! | `notifier` | [`Notifier`] | `NotificationFailed` (저장된 상태는 유지) |
//! | `address_lookup` | [`AddressLookup`] | 수정 전체 중단 |
//! | `clock` | [`Clock`] | |
//!
//! 협력자 호출을 기다리는 동안 락을 잡지 않으며, 내부 재시도도 하지 않습니다.
//! 동시 요청 간 경쟁은 저장소의 유일성 인덱스와 버전 검사로 해결합니다.

use std::sync::Arc;
use crate::config::RegistrationPolicy;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::request::{
    AvailabilityQuery, CreateAccountRequest, ResendCodeRequest, UpdateAccountRequest,
    VerifyEmailRequest,
};
use crate::domain::dto::accounts::response::{
    AccountResponse, AvailabilityResponse, CreateAccountResponse, ResendCodeResponse,
};
use crate::domain::entities::accounts::Account;
use crate::domain::models::PostalAddress;
use crate::repositories::accounts::AccountStore;
use crate::services::lookups::{AddressLookup, LookupError};
use crate::services::notifications::Notifier;
use crate::services::verification::{Clock, CodeGenerator};
use crate::utils::string_utils::validate_required_string;

pub struct AccountService {
    store: Arc<dyn AccountStore>,
    notifier: Arc<dyn Notifier>,
    address_lookup: Arc<dyn AddressLookup>,
    clock: Arc<dyn Clock>,
    codes: CodeGenerator,
    policy: RegistrationPolicy,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        notifier: Arc<dyn Notifier>,
        address_lookup: Arc<dyn AddressLookup>,
        clock: Arc<dyn Clock>,
        policy: RegistrationPolicy,
    ) -> Self {
        Self {
            store,
            notifier,
            address_lookup,
            clock,
            codes: CodeGenerator::new(policy.code_ttl),
            policy,
        }
    }

    /// 새 계정을 만들고 인증 코드를 보냅니다.
    ///
    /// 사전 중복 확인은 빠른 실패용이고, 동시 가입 경쟁은 저장소의 유일성 제약이 막습니다.
    /// 메일 발송이 실패해도 계정과 코드는 남아 있으므로 재발송으로 복구할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 공백뿐인 이름/이메일/전화번호
    /// * `DuplicateContact` - 이메일 또는 전화번호가 이미 사용 중
    /// * `NotificationFailed` - 계정은 저장되었으나 메일 발송 실패
    pub async fn create_account(&self, request: CreateAccountRequest) -> AppResult<CreateAccountResponse> {
        let name = validate_required_string(&request.name, "name")?;
        let email = validate_required_string(&request.email, "email")?;
        let phone = validate_required_string(&request.phone, "phone")?;

        if self.store
            .find_by_email_or_phone(Some(&email), Some(&phone))
            .await?
            .is_some()
        {
            log::warn!("가입 거부 (중복 연락처): {}", email);
            return Err(duplicate_contact());
        }

        let now = self.clock.now();
        let issued = self.codes.issue(now);
        let code = issued.code.clone();

        let account = self.store
            .insert(Account::new_pending(name, email, phone, issued, now))
            .await
            .inspect_err(|e| {
                if matches!(e, AppError::DuplicateContact(_)) {
                    log::warn!("가입 거부 (동시 가입 경쟁)");
                }
            })?;

        log::info!("계정 생성: {} ({})", account.id_hex(), account.email);

        self.deliver_code(&account.email, &code).await?;

        Ok(CreateAccountResponse {
            account: AccountResponse::from(account),
            verification_code: self.exposed(code),
        })
    }

    /// 제출된 코드로 이메일 인증을 완료하고 환영 메일을 보냅니다.
    ///
    /// 같은 계정에 대한 동시 인증 중 하나만 성공합니다.
    /// 버전 충돌로 진 요청은 최신 상태를 다시 읽어 `AlreadyVerified`로 응답합니다.
    pub async fn verify_email(&self, id: &str, request: VerifyEmailRequest) -> AppResult<AccountResponse> {
        let mut account = self.load_for_update(id).await?;

        if let Err(e) = account.confirm_email(&request.code, self.clock.now()) {
            log::warn!("이메일 인증 거부 ({}): {}", id, e);
            return Err(e);
        }

        let account = match self.store.save(account).await {
            Ok(saved) => saved,
            Err(AppError::ConcurrentModification(message)) => {
                return Err(self.resolve_verify_conflict(id, message).await);
            }
            Err(e) => return Err(e),
        };

        log::info!("이메일 인증 완료: {}", account.id_hex());

        self.notifier
            .send_welcome(&account.email, &account.name)
            .await
            .map_err(|e| {
                log::error!("환영 메일 발송 실패 ({}): {}", account.email, e);
                AppError::NotificationFailed(format!("환영 메일 발송 실패: {}", e))
            })?;

        Ok(AccountResponse::from(account))
    }

    /// 새 코드를 발급해 이전 코드를 덮어쓰고 다시 보냅니다.
    ///
    /// 만료 시각은 재발송 시점부터 다시 계산됩니다. 재발송 횟수 제한은 없습니다.
    pub async fn resend_verification_code(&self, request: ResendCodeRequest) -> AppResult<ResendCodeResponse> {
        let email = validate_required_string(&request.email, "email")?;

        let mut account = self.store
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", email)))?;

        let now = self.clock.now();
        let issued = self.codes.issue(now);
        let code = issued.code.clone();

        if let Err(e) = account.issue_code(issued, now) {
            log::warn!("코드 재발송 거부 ({}): {}", email, e);
            return Err(e);
        }

        let account = self.store.save(account).await?;
        log::info!("인증 코드 재발급: {}", account.id_hex());

        self.deliver_code(&account.email, &code).await?;

        Ok(ResendCodeResponse {
            message: "인증 코드를 다시 보냈습니다".to_string(),
            verification_code: self.exposed(code),
        })
    }

    /// 프로필을 부분 수정합니다.
    ///
    /// 우편번호가 있으면 먼저 주소를 조회하고, 조회 결과의 네 주소 필드가
    /// 같은 요청에 담긴 값보다 우선합니다. 조회가 실패하면 아무것도 저장하지 않습니다.
    pub async fn update_account(&self, id: &str, request: UpdateAccountRequest) -> AppResult<AccountResponse> {
        let mut account = self.load_for_update(id).await?;

        if self.policy.require_verified_for_update && !account.email_verified {
            log::warn!("프로필 수정 거부 (미인증): {}", id);
            return Err(AppError::EmailNotVerified(
                "이메일 인증 후에 프로필을 수정할 수 있습니다".to_string(),
            ));
        }

        let mut changes = request.into_changes();

        if let Some(postal_code) = changes.postal_code.clone() {
            let address = self.resolve_postal_code(&postal_code).await?;
            changes = changes.with_resolved_address(address);
        }

        if changes.is_empty() {
            log::debug!("변경 사항 없음: {}", id);
            return Ok(AccountResponse::from(account));
        }

        account.apply_changes(changes, self.clock.now());
        let account = self.store.save(account).await?;

        log::info!("프로필 수정: {}", account.id_hex());
        Ok(AccountResponse::from(account))
    }

    /// 이메일/전화번호 중 하나라도 사용 중이면 `available = false`입니다.
    pub async fn check_availability(&self, query: AvailabilityQuery) -> AppResult<AvailabilityResponse> {
        if query.is_empty() {
            return Err(AppError::MissingCriteria(
                "email 또는 phone 중 하나는 필요합니다".to_string(),
            ));
        }

        let existing = self.store
            .find_by_email_or_phone(query.email.as_deref(), query.phone.as_deref())
            .await?;

        Ok(AvailabilityResponse {
            available: existing.is_none(),
        })
    }

    pub async fn get_account(&self, id: &str) -> AppResult<AccountResponse> {
        self.load(id).await.map(AccountResponse::from)
    }

    /// 수정 흐름과 같은 조회기로 주소를 미리 확인합니다.
    pub async fn lookup_address(&self, postal_code: &str) -> AppResult<PostalAddress> {
        self.resolve_postal_code(postal_code).await
    }

    async fn load(&self, id: &str) -> AppResult<Account> {
        self.store.find_by_id(id).await?.ok_or_else(|| account_not_found(id))
    }

    /// 코드 검사와 버전 검사는 캐시가 아닌 최신 상태를 기준으로 합니다.
    async fn load_for_update(&self, id: &str) -> AppResult<Account> {
        self.store.load_for_update(id).await?.ok_or_else(|| account_not_found(id))
    }

    async fn deliver_code(&self, email: &str, code: &str) -> AppResult<()> {
        self.notifier
            .send_verification_code(email, code, self.policy.code_ttl)
            .await
            .map_err(|e| {
                log::error!("인증 메일 발송 실패 ({}): {}", email, e);
                AppError::NotificationFailed(format!("인증 메일 발송 실패: {}", e))
            })
    }

    async fn resolve_postal_code(&self, postal_code: &str) -> AppResult<PostalAddress> {
        self.address_lookup
            .resolve_address(postal_code)
            .await
            .map_err(|e| match e {
                LookupError::InvalidInput(value) => {
                    AppError::ValidationError(format!("유효하지 않은 우편번호입니다: {}", value))
                }
                LookupError::NotFound(value) => {
                    log::warn!("존재하지 않는 우편번호: {}", value);
                    AppError::PostalCodeNotFound(format!("우편번호를 찾을 수 없습니다: {}", value))
                }
                LookupError::RateLimited => {
                    log::error!("주소 조회 한도 초과");
                    AppError::UpstreamRateLimited("주소 조회 한도를 초과했습니다".to_string())
                }
                LookupError::Unavailable(reason) => {
                    log::error!("주소 조회 실패: {}", reason);
                    AppError::EnrichmentUnavailable(format!("주소 조회 실패: {}", reason))
                }
            })
    }

    async fn resolve_verify_conflict(&self, id: &str, message: String) -> AppError {
        match self.store.load_for_update(id).await {
            Ok(Some(latest)) if latest.email_verified => {
                log::warn!("이메일 인증 거부 (동시 인증에서 패배): {}", id);
                AppError::AlreadyVerified("이미 인증된 이메일입니다".to_string())
            }
            Ok(_) => AppError::ConcurrentModification(message),
            Err(e) => e,
        }
    }

    fn exposed(&self, code: String) -> Option<String> {
        self.policy.expose_code_in_response.then_some(code)
    }
}

fn account_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", id))
}

fn duplicate_contact() -> AppError {
    AppError::DuplicateContact("이미 사용 중인 이메일 또는 전화번호입니다".to_string())
}
