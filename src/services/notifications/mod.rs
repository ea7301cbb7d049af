//! 알림 발송 모듈
//!
//! 워크플로우는 [`Notifier`] 계약에만 의존하고,
//! 실제 메일 발송은 [`MailService`](mail_service::MailService)가 담당합니다.

pub mod mail_service;

use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;

pub use mail_service::{MailService, MailTransport};

/// 메일 발송 중 발생할 수 있는 에러
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// 알림 발송 계약
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 인증 코드를 이메일로 보냅니다. `valid_for`는 본문에 안내할 유효 시간입니다.
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
        valid_for: Duration,
    ) -> Result<(), NotificationError>;

    /// 인증 완료 후 환영 메일을 보냅니다.
    async fn send_welcome(&self, email: &str, name: &str) -> Result<(), NotificationError>;
}
