//! 주소/기업 정보 조회 핸들러

use actix_web::{web, HttpResponse, get};
use crate::core::errors::AppError;
use crate::services::accounts::AccountService;
use crate::services::lookups::CnpjService;

/// `GET /users/address/{cep}`
///
/// 프로필 수정 시 사용되는 것과 같은 조회기로 주소를 미리 보여줍니다.
#[get("/address/{cep}")]
pub async fn lookup_address(
    service: web::Data<AccountService>,
    cep: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let address = service.lookup_address(&cep).await?;

    Ok(HttpResponse::Ok().json(address))
}

/// `GET /users/company/{cnpj}`
#[get("/company/{cnpj}")]
pub async fn lookup_company(
    cnpj_service: web::Data<CnpjService>,
    cnpj: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let company = cnpj_service.lookup_company(&cnpj).await?;

    Ok(HttpResponse::Ok().json(company))
}
