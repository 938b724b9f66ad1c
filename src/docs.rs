// src/docs.rs

use utoipa::OpenApi;

use crate::common;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ERP Backend",
        description = "Cadastros (empresas, pessoas, usuários, mercadorias) e livro-razão de estoque"
    ),
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_counts,

        // --- Cadastros ---
        handlers::companies::list_companies,
        handlers::companies::create_company,
        handlers::people::list_people,
        handlers::people::create_person,
        handlers::users::list_users,
        handlers::users::create_user,

        // --- INVENTORY ---
        handlers::inventory::list_items,
        handlers::inventory::create_item,
        handlers::inventory::list_movements,
        handlers::inventory::movement_item_options,
        handlers::inventory::create_movement,
    ),
    components(
        schemas(
            // --- Erros ---
            common::error::ErrorResponse,

            // --- DASHBOARD ---
            models::dashboard::DashboardCounts,

            // --- Cadastros ---
            models::company::Company,
            models::company::NewCompany,
            models::person::PersonKind,
            models::person::Person,
            models::person::NewPerson,
            models::user::AccessLevel,
            models::user::User,
            models::user::NewUser,

            // --- Inventory ---
            models::inventory::Item,
            models::inventory::NewItem,
            models::inventory::MovementKind,
            models::inventory::StockMovement,
            models::inventory::MovementEntry,
            models::inventory::NewMovement,
        )
    ),
    tags(
        (name = "Cadastros", description = "Empresas, Pessoas e Usuários"),
        (name = "Inventory", description = "Mercadorias e Movimentações de Estoque"),
        (name = "Dashboard", description = "Totais dos cadastros")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let json = ApiDoc::openapi().to_json().unwrap();

        for path in ["/api/dashboard", "/api/companies", "/api/people", "/api/users", "/api/items", "/api/movements", "/api/movements/items"] {
            assert!(json.contains(&format!("\"{path}\"")), "faltou {path}");
        }
        assert!(json.contains("ErrorResponse"));
    }
}
