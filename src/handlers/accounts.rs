//! 계정 가입/인증/프로필 핸들러
//!
//! 요청 본문은 서비스 호출 전에 `validator`로 검증하며,
//! 실패하면 `ValidationError`(400)로 응답합니다.

use actix_web::{web, HttpResponse, get, post, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::accounts::request::{
    AvailabilityQuery, CreateAccountRequest, ResendCodeRequest, UpdateAccountRequest,
    VerifyEmailRequest,
};
use crate::services::accounts::AccountService;

/// `POST /users` → 201
#[post("")]
pub async fn create_account(
    service: web::Data<AccountService>,
    payload: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_account(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// `GET /users/validate?email=&phone=`
#[get("/validate")]
pub async fn check_availability(
    service: web::Data<AccountService>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    let response = service.check_availability(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/resend-verification")]
pub async fn resend_verification_code(
    service: web::Data<AccountService>,
    payload: web::Json<ResendCodeRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.resend_verification_code(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/{account_id}/verify-email")]
pub async fn verify_email(
    service: web::Data<AccountService>,
    account_id: web::Path<String>,
    payload: web::Json<VerifyEmailRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account = service.verify_email(&account_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(account))
}

#[put("/{account_id}")]
pub async fn update_account(
    service: web::Data<AccountService>,
    account_id: web::Path<String>,
    payload: web::Json<UpdateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account = service.update_account(&account_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(account))
}

#[get("/{account_id}")]
pub async fn get_account(
    service: web::Data<AccountService>,
    account_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let account = service.get_account(&account_id).await?;

    Ok(HttpResponse::Ok().json(account))
}
