// src/routes.rs

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

// Monta o router principal. Separado do main para os testes usarem o mesmo app.
pub fn build_router(app_state: AppState) -> Router {
    let register_routes = Router::new()
        .route(
            "/companies",
            get(handlers::companies::list_companies).post(handlers::companies::create_company),
        )
        .route(
            "/people",
            get(handlers::people::list_people).post(handlers::people::create_person),
        )
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        );

    let inventory_routes = Router::new()
        .route(
            "/items",
            get(handlers::inventory::list_items).post(handlers::inventory::create_item),
        )
        .route(
            "/movements",
            get(handlers::inventory::list_movements).post(handlers::inventory::create_movement),
        )
        .route("/movements/items", get(handlers::inventory::movement_item_options));

    let api_routes = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/dashboard", get(handlers::dashboard::get_counts))
        .merge(register_routes)
        .merge(inventory_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .with_state(app_state)
}
