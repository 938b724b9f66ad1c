// src/db/dashboard_repo.rs

use sqlx::{SqliteConnection, SqlitePool};

use crate::{common::error::AppError, models::dashboard::DashboardCounts};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: SqlitePool,
}

impl DashboardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Quatro COUNTs na mesma conexão, sem transação:
    // cada contagem vê o banco no momento em que roda.
    pub async fn counts(&self) -> Result<DashboardCounts, AppError> {
        let mut conn = self.pool.acquire().await?;

        Ok(DashboardCounts {
            companies: count(&mut conn, "SELECT COUNT(*) FROM companies").await?,
            people: count(&mut conn, "SELECT COUNT(*) FROM people").await?,
            users: count(&mut conn, "SELECT COUNT(*) FROM users").await?,
            items: count(&mut conn, "SELECT COUNT(*) FROM items").await?,
        })
    }
}

async fn count(conn: &mut SqliteConnection, sql: &'static str) -> Result<i64, AppError> {
    let total: i64 = sqlx::query_scalar(sql).fetch_one(&mut *conn).await?;
    Ok(total)
}
