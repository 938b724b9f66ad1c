// src/handlers/inventory.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::{error::{ApiError, ErrorResponse}, i18n::Message},
    config::AppState,
    handlers::{created, Created},
    middleware::i18n::Locale,
    models::inventory::{Item, MovementEntry, NewItem, NewMovement, StockMovement},
};

// ?all=true inclui as mercadorias desativadas
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Inclui as mercadorias desativadas
    #[serde(default)]
    pub all: bool,
}

// GET /api/items
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Inventory",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Mercadorias em ordem de descrição", body = Vec<Item>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn list_items(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ListItemsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .inventory_repo
        .list_items(!query.all)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(items)))
}

// POST /api/items
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Inventory",
    request_body = NewItem,
    responses(
        (status = 201, description = "Cadastrado com sucesso", body = Created<Item>),
        (status = 409, description = "Código já cadastrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewItem>,
) -> Result<impl IntoResponse, ApiError> {
    let item = app_state
        .inventory_repo
        .create_item(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    tracing::info!(item_id = item.id, code = ?item.code, "Mercadoria cadastrada");

    Ok(created(Message::ItemCreated, &locale, item))
}

// GET /api/movements
#[utoipa::path(
    get,
    path = "/api/movements",
    tag = "Inventory",
    responses(
        (status = 200, description = "Livro-razão, mais recentes primeiro", body = Vec<MovementEntry>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn list_movements(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let movements = app_state
        .inventory_repo
        .list_movements()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(movements)))
}

// GET /api/movements/items
#[utoipa::path(
    get,
    path = "/api/movements/items",
    tag = "Inventory",
    responses(
        (status = 200, description = "Mercadorias ativas para o formulário de movimentação", body = Vec<Item>),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
// As opções do formulário de movimentação: só mercadorias ativas.
pub async fn movement_item_options(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .inventory_repo
        .list_items(true)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(items)))
}

// POST /api/movements
#[utoipa::path(
    post,
    path = "/api/movements",
    tag = "Inventory",
    request_body = NewMovement,
    responses(
        (status = 201, description = "Cadastrado com sucesso", body = Created<StockMovement>),
        (status = 422, description = "Mercadoria não encontrada", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    )
)]
pub async fn create_movement(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewMovement>,
) -> Result<impl IntoResponse, ApiError> {
    let movement = app_state
        .inventory_repo
        .create_movement(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    tracing::info!(
        movement_id = movement.id,
        item_id = movement.item_id,
        quantity = movement.quantity,
        kind = ?movement.kind,
        "Movimentação registrada"
    );

    Ok(created(Message::MovementCreated, &locale, movement))
}
