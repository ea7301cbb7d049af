//! # Application Error Handling System
//!
//! 회원 가입 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 가입/인증 상태 머신이 거부하는 모든 전이를 하나의 열거형으로 표현하고,
//! `actix_web::ResponseError` 구현을 통해 일관된 HTTP 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 다음과 같은 평평한 JSON 형식을 따릅니다:
//!
//! ```json
//! {
//!   "error": "인증 코드가 일치하지 않습니다",
//!   "kind": "CODE_MISMATCH"
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문/쿼리 검증 실패 |
//! | `DuplicateContact` | 400 Bad Request | 이메일 또는 전화번호 중복 |
//! | `AlreadyVerified` | 400 Bad Request | 이미 인증된 계정 |
//! | `MissingCode` | 400 Bad Request | 저장된 인증 코드 없음 |
//! | `CodeMismatch` | 400 Bad Request | 인증 코드 불일치 |
//! | `CodeExpired` | 400 Bad Request | 인증 코드 만료 |
//! | `MissingCriteria` | 400 Bad Request | 가용성 조회 조건 누락 |
//! | `EmailNotVerified` | 403 Forbidden | 미인증 계정의 프로필 수정 (정책 활성 시) |
//! | `NotFound` | 404 Not Found | 계정 없음 |
//! | `PostalCodeNotFound` | 404 Not Found | 존재하지 않는 우편번호 |
//! | `ConcurrentModification` | 409 Conflict | 동시 수정 충돌 |
//! | `UpstreamRateLimited` | 429 Too Many Requests | 외부 조회 API 호출 한도 초과 |
//! | `EnrichmentUnavailable` | 502 Bad Gateway | 주소 조회 실패 |
//! | `NotificationFailed` | 502 Bad Gateway | 메일 발송 실패 |
//! | `ExternalServiceError` | 502 Bad Gateway | 기업 정보 조회 실패 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 워크플로우가 거부하는 전이는 모두 요청 단위에서 종결되며,
/// 서비스 내부에서 재시도하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 워크플로우에 도달하기 전에 DTO 검증 단계에서 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 계정이 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이메일 또는 전화번호가 이미 다른 계정에 바인딩되어 있음
    #[error("Duplicate contact: {0}")]
    DuplicateContact(String),

    /// 이미 이메일 인증이 완료된 계정
    #[error("Already verified: {0}")]
    AlreadyVerified(String),

    /// 현재 저장된 인증 코드가 없음
    #[error("Missing verification code: {0}")]
    MissingCode(String),

    /// 제출된 코드가 저장된 코드와 바이트 단위로 일치하지 않음
    #[error("Code mismatch: {0}")]
    CodeMismatch(String),

    /// 저장된 코드의 만료 시각이 지남 (`now >= expiry`)
    #[error("Code expired: {0}")]
    CodeExpired(String),

    /// 가용성 조회에 이메일/전화번호가 모두 없음
    #[error("Missing criteria: {0}")]
    MissingCriteria(String),

    /// 프로필 수정 시 이메일 인증이 선행되어야 함
    #[error("Email not verified: {0}")]
    EmailNotVerified(String),

    /// 주소 조회 서비스가 해당 우편번호를 알지 못함
    #[error("Postal code not found: {0}")]
    PostalCodeNotFound(String),

    /// 낙관적 버전 검사 실패
    #[error("Concurrent modification: {0}")]
    ConcurrentModification(String),

    /// 외부 조회 API가 호출 한도를 초과했다고 응답함
    #[error("Upstream rate limited: {0}")]
    UpstreamRateLimited(String),

    /// 주소 조회 서비스 호출 실패 (프로필 수정 전체가 중단됨)
    #[error("Enrichment unavailable: {0}")]
    EnrichmentUnavailable(String),

    /// 알림(메일) 발송 실패
    ///
    /// 계정/코드 상태는 이미 저장된 뒤이므로 재발송으로 복구할 수 있습니다.
    #[error("Notification failed: {0}")]
    NotificationFailed(String),

    /// 외부 서비스 에러
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `kind` 필드에 들어가는 에러 식별자를 반환합니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DuplicateContact(_) => "DUPLICATE_CONTACT",
            AppError::AlreadyVerified(_) => "ALREADY_VERIFIED",
            AppError::MissingCode(_) => "MISSING_CODE",
            AppError::CodeMismatch(_) => "CODE_MISMATCH",
            AppError::CodeExpired(_) => "CODE_EXPIRED",
            AppError::MissingCriteria(_) => "MISSING_CRITERIA",
            AppError::EmailNotVerified(_) => "EMAIL_NOT_VERIFIED",
            AppError::PostalCodeNotFound(_) => "POSTAL_CODE_NOT_FOUND",
            AppError::ConcurrentModification(_) => "CONCURRENT_MODIFICATION",
            AppError::UpstreamRateLimited(_) => "UPSTREAM_RATE_LIMITED",
            AppError::EnrichmentUnavailable(_) => "ENRICHMENT_UNAVAILABLE",
            AppError::NotificationFailed(_) => "NOTIFICATION_FAILED",
            AppError::ExternalServiceError(_) => "EXTERNAL_SERVICE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::DuplicateContact(_)
            | AppError::AlreadyVerified(_)
            | AppError::MissingCode(_)
            | AppError::CodeMismatch(_)
            | AppError::CodeExpired(_)
            | AppError::MissingCriteria(_) => StatusCode::BAD_REQUEST,
            AppError::EmailNotVerified(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) | AppError::PostalCodeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConcurrentModification(_) => StatusCode::CONFLICT,
            AppError::UpstreamRateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::EnrichmentUnavailable(_)
            | AppError::NotificationFailed(_)
            | AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 기록하고, 클라이언트에는 평평한
    /// `{error, kind}` 본문만 전달합니다. 재시도 힌트는 포함하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패 [{}]: {}", self.kind(), self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
