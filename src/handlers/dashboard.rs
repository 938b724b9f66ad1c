// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::{ApiError, ErrorResponse},
    config::AppState,
    middleware::i18n::Locale,
    models::dashboard::DashboardCounts,
};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Total de registros de cada cadastro", body = DashboardCounts),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn get_counts(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let counts = app_state
        .dashboard_repo
        .counts()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(counts)))
}
