// src/handlers/companies.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::{ApiError, ErrorResponse}, i18n::Message},
    config::AppState,
    handlers::{created, Created},
    middleware::i18n::Locale,
    models::company::{Company, NewCompany},
};

// GET /api/companies
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Cadastros",
    responses(
        (status = 200, description = "Empresas em ordem de razão social", body = Vec<Company>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn list_companies(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let companies = app_state
        .company_repo
        .list_companies()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(companies)))
}

// POST /api/companies
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Cadastros",
    request_body = NewCompany,
    responses(
        (status = 201, description = "Cadastrado com sucesso", body = Created<Company>),
        (status = 409, description = "CNPJ já cadastrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewCompany>,
) -> Result<impl IntoResponse, ApiError> {
    let company = app_state
        .company_repo
        .create_company(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    tracing::info!(company_id = company.id, "Empresa cadastrada");

    Ok(created(Message::CompanyCreated, &locale, company))
}
