//! Account Entity Implementation
//!
//! 가입 계정 엔티티와 이메일 인증 상태 전이 규칙입니다.
//! 상태 전이는 모두 이 타입의 메서드를 통해서만 일어나며,
//! 저장은 리포지토리가 담당합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::{PostalAddress, VerificationCode, VerificationState};

/// 가입 계정 엔티티
///
/// - `email`, `phone`은 모든 계정에 걸쳐 유일하며 생성 후 바뀌지 않습니다.
/// - 인증 코드와 만료 시각은 [`VerificationCode`] 하나로 묶여 함께 존재하거나 함께 없습니다.
/// - `email_verified`는 한 번 `true`가 되면 되돌아가지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    /// 주 이메일 (unique)
    pub email: String,
    /// 전화번호 (unique)
    pub phone: String,
    pub email_verified: bool,
    /// 현재 유효한(또는 만료된) 인증 코드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_verification: Option<VerificationCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_email: Option<String>,
    /// 기업 등록번호
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// 두 글자 주(州) 코드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
    /// 낙관적 동시성 제어용 버전. 저장될 때마다 1씩 증가합니다.
    #[serde(default)]
    pub version: i64,
}

/// 프로필 수정 요청에서 넘어온 변경 사항
///
/// `None`인 필드는 기존 값을 그대로 둡니다. 값을 지우는 경로는 없습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub secondary_email: Option<String>,
    pub cnpj: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ProfileChanges {
    /// 조회된 주소의 네 필드로 호출자가 보낸 값을 덮어씁니다.
    ///
    /// 같은 요청에 street 등이 함께 들어와도 조회 결과가 우선합니다.
    /// 우편번호 자체는 호출자가 제출한 값을 유지합니다.
    pub fn with_resolved_address(mut self, address: PostalAddress) -> Self {
        self.street = Some(address.street);
        self.neighborhood = Some(address.neighborhood);
        self.city = Some(address.city);
        self.state = Some(address.state);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Account {
    /// 인증 대기 상태의 새 계정을 만듭니다.
    ///
    /// 생성 시 항상 코드가 함께 저장되므로 `UnverifiedCodePending`에서 시작합니다.
    pub fn new_pending(
        name: String,
        email: String,
        phone: String,
        code: VerificationCode,
        now: DateTime,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            phone,
            email_verified: false,
            pending_verification: Some(code),
            secondary_email: None,
            cnpj: None,
            street: None,
            number: None,
            neighborhood: None,
            city: None,
            state: None,
            postal_code: None,
            latitude: None,
            longitude: None,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn id_hex(&self) -> String {
        self.id.to_hex()
    }

    pub fn verification_state(&self) -> VerificationState {
        match (self.email_verified, &self.pending_verification) {
            (true, _) => VerificationState::Verified,
            (false, Some(_)) => VerificationState::UnverifiedCodePending,
            (false, None) => VerificationState::UnverifiedNoCode,
        }
    }

    /// 새 인증 코드를 저장합니다. 이전 코드는 만료 여부와 관계없이 덮어씁니다.
    pub fn issue_code(&mut self, code: VerificationCode, now: DateTime) -> AppResult<()> {
        if self.email_verified {
            return Err(AppError::AlreadyVerified("이미 인증된 이메일입니다".to_string()));
        }

        self.pending_verification = Some(code);
        self.updated_at = now;
        Ok(())
    }

    /// 제출된 코드로 이메일 인증을 완료합니다.
    ///
    /// 검사 순서: 이미 인증됨 → 코드 없음 → 코드 불일치 → 만료(`now >= expires_at`).
    /// 성공하면 코드를 지우므로 같은 코드는 다시 사용할 수 없습니다.
    pub fn confirm_email(&mut self, submitted: &str, now: DateTime) -> AppResult<()> {
        let pending = match (self.verification_state(), &self.pending_verification) {
            (VerificationState::Verified, _) => {
                return Err(AppError::AlreadyVerified("이미 인증된 이메일입니다".to_string()));
            }
            (_, None) => {
                return Err(AppError::MissingCode("발급된 인증 코드가 없습니다".to_string()));
            }
            (_, Some(pending)) => pending,
        };

        if !pending.matches(submitted) {
            return Err(AppError::CodeMismatch("인증 코드가 일치하지 않습니다".to_string()));
        }

        if pending.is_expired_at(now) {
            return Err(AppError::CodeExpired("인증 코드가 만료되었습니다".to_string()));
        }

        self.email_verified = true;
        self.pending_verification = None;
        self.updated_at = now;
        Ok(())
    }

    /// 변경 사항 중 값이 있는 필드만 덮어씁니다.
    pub fn apply_changes(&mut self, changes: ProfileChanges, now: DateTime) {
        let ProfileChanges {
            secondary_email,
            cnpj,
            street,
            number,
            neighborhood,
            city,
            state,
            postal_code,
            latitude,
            longitude,
        } = changes;

        overwrite(&mut self.secondary_email, secondary_email);
        overwrite(&mut self.cnpj, cnpj);
        overwrite(&mut self.street, street);
        overwrite(&mut self.number, number);
        overwrite(&mut self.neighborhood, neighborhood);
        overwrite(&mut self.city, city);
        overwrite(&mut self.state, state);
        overwrite(&mut self.postal_code, postal_code);
        overwrite(&mut self.latitude, latitude);
        overwrite(&mut self.longitude, longitude);

        self.updated_at = now;
    }
}

fn overwrite<T>(slot: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *slot = incoming;
    }
}
