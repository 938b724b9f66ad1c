// src/handlers/users.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::{ApiError, ErrorResponse}, i18n::Message},
    config::AppState,
    handlers::{created, Created},
    middleware::i18n::Locale,
    models::user::{NewUser, User},
};

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Cadastros",
    responses(
        (status = 200, description = "Usuários em ordem de nome (sem senha)", body = Vec<User>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let users = app_state
        .user_repo
        .list_users()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(users)))
}

// POST /api/users
// Não existe login: o cadastro só grava o registro.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Cadastros",
    request_body = NewUser,
    responses(
        (status = 201, description = "Cadastrado com sucesso", body = Created<User>),
        (status = 409, description = "Email já cadastrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = app_state
        .user_repo
        .create_user(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    tracing::info!(user_id = user.id, "Usuário cadastrado");

    Ok(created(Message::UserCreated, &locale, user))
}
