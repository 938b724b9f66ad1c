// src/models/inventory.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::form::blank_as_none;
use crate::models::money::Money;

// --- 1. Mercadorias (catálogo) ---
// O item não guarda saldo: a quantidade em estoque só existe como histórico de movimentações.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub code: Option<String>, // UNIQUE quando presente
    pub description: String,
    pub category: Option<String>,
    pub unit: Option<String>,
    #[schema(value_type = Option<f64>, example = 12.5)]
    pub cost_price: Option<Money>,
    #[schema(value_type = Option<f64>, example = 19.9)]
    pub sale_price: Option<Money>,
    pub min_stock: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    // "" vira NULL para não colidir na coluna UNIQUE.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "A1")]
    pub code: Option<String>,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 12.5)]
    pub cost_price: Option<Money>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 19.9)]
    pub sale_price: Option<Money>,
    #[serde(default)]
    pub min_stock: i64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for NewItem {
    fn default() -> Self {
        Self {
            code: None,
            description: String::new(),
            category: None,
            unit: None,
            cost_price: None,
            sale_price: None,
            min_stock: 0,
            active: default_active(),
        }
    }
}

// --- 2. Movimentações de Estoque (livro-razão, só INSERT) ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    In,         // Entrada
    Out,        // Saída
    Adjustment, // Ajuste
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: i64,
    pub item_id: i64,
    pub quantity: i64,
    #[schema(value_type = Option<f64>)]
    pub unit_value: Option<Money>,
    pub moved_at: DateTime<Utc>,
    pub kind: MovementKind,
    pub note: Option<String>,
}

// Linha da listagem: a movimentação + a descrição da mercadoria (JOIN).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovementEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub movement: StockMovement,
    pub item_description: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub item_id: i64,
    // Sem validação de sinal: saldo implícito negativo é permitido.
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub unit_value: Option<Money>,
    pub kind: MovementKind,
    #[serde(default)]
    pub note: Option<String>,
}
