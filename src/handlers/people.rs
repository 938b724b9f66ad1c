// src/handlers/people.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::{ApiError, ErrorResponse}, i18n::Message},
    config::AppState,
    handlers::{created, Created},
    middleware::i18n::Locale,
    models::person::{NewPerson, Person},
};

// GET /api/people
#[utoipa::path(
    get,
    path = "/api/people",
    tag = "Cadastros",
    responses(
        (status = 200, description = "Pessoas em ordem de nome", body = Vec<Person>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn list_people(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let people = app_state
        .person_repo
        .list_people()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(people)))
}

// POST /api/people
#[utoipa::path(
    post,
    path = "/api/people",
    tag = "Cadastros",
    request_body = NewPerson,
    responses(
        (status = 201, description = "Cadastrado com sucesso", body = Created<Person>),
        (status = 409, description = "CPF já cadastrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn create_person(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewPerson>,
) -> Result<impl IntoResponse, ApiError> {
    let person = app_state
        .person_repo
        .create_person(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    tracing::info!(person_id = person.id, kind = ?person.kind, "Pessoa cadastrada");

    Ok(created(Message::PersonCreated, &locale, person))
}
