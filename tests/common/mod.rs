#![allow(dead_code)]

use erp_backend::{
    common::db_utils,
    models::inventory::{MovementKind, NewItem, NewMovement},
    AppState, Config,
};

fn in_memory_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

// Banco SQLite em memória, novo a cada teste, com as migrações reais aplicadas.
pub async fn setup_state() -> AppState {
    let config = in_memory_config();
    let state = AppState::new(&config).await.expect("Failed to create DB pool");
    db_utils::run_migrations(&state.db_pool)
        .await
        .expect("Failed to run migrations");
    state
}

pub fn item(code: &str, description: &str) -> NewItem {
    NewItem {
        code: Some(code.to_string()),
        description: description.to_string(),
        ..NewItem::default()
    }
}

pub fn movement(item_id: i64, quantity: i64, kind: MovementKind) -> NewMovement {
    NewMovement {
        item_id,
        quantity,
        unit_value: None,
        kind,
        note: None,
    }
}
