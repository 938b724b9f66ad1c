// src/db/inventory_repo.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    common::error::{AppError, UniqueField},
    models::inventory::{Item, MovementEntry, NewItem, NewMovement, StockMovement},
};

// Mercadorias e o livro-razão de estoque.
#[derive(Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ---
    // Mercadorias
    // ---

    /// Lista por descrição. `active_only` esconde os itens desativados.
    pub async fn list_items(&self, active_only: bool) -> Result<Vec<Item>, AppError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT * FROM items
            WHERE active = 1 OR ? = 0
            ORDER BY description ASC, id ASC
            "#,
        )
            .bind(active_only)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn create_item(&self, new: &NewItem) -> Result<Item, AppError> {
        sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (
                code, description, category, unit,
                cost_price, sale_price, min_stock, active, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(&new.code)
            .bind(&new.description)
            .bind(&new.category)
            .bind(&new.unit)
            .bind(new.cost_price)
            .bind(new.sale_price)
            .bind(new.min_stock)
            .bind(new.active)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_insert(e, UniqueField::ItemCode))
    }

    // ---
    // Movimentações
    // ---

    /// Histórico completo, mais recentes primeiro, com a descrição da mercadoria.
    pub async fn list_movements(&self) -> Result<Vec<MovementEntry>, AppError> {
        let movements = sqlx::query_as::<_, MovementEntry>(
            r#"
            SELECT s.*, m.description AS item_description
            FROM stock_movements s
            JOIN items m ON s.item_id = m.id
            ORDER BY s.moved_at DESC, s.id DESC
            "#,
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(movements)
    }

    /// Registra uma linha no livro-razão.
    /// Não calcula nem confere saldo: o único controle é a chave estrangeira do item.
    pub async fn create_movement(&self, new: &NewMovement) -> Result<StockMovement, AppError> {
        sqlx::query_as::<_, StockMovement>(
            r#"
            INSERT INTO stock_movements (item_id, quantity, unit_value, moved_at, kind, note)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(new.item_id)
            .bind(new.quantity)
            .bind(new.unit_value)
            .bind(Utc::now())
            .bind(new.kind)
            .bind(&new.note)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::ForeignKeyViolation(new.item_id);
                    }
                }
                e.into()
            })
    }
}
