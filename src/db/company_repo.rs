// src/db/company_repo.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    common::error::{AppError, UniqueField},
    models::company::{Company, NewCompany},
};

// Responsável por todas as interações com a tabela 'companies'
#[derive(Clone)]
pub struct CompanyRepository {
    pool: SqlitePool,
}

impl CompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Lista em ordem de razão social
    pub async fn list_companies(&self) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT * FROM companies ORDER BY legal_name ASC, id ASC",
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(companies)
    }

    // Cadastra uma empresa. CNPJ repetido vira DuplicateKey(CompanyTaxId).
    pub async fn create_company(&self, new: &NewCompany) -> Result<Company, AppError> {
        sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (
                legal_name, trade_name, tax_id, state_registration,
                address, phone, email, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(&new.legal_name)
            .bind(&new.trade_name)
            .bind(&new.tax_id)
            .bind(&new.state_registration)
            .bind(&new.address)
            .bind(&new.phone)
            .bind(&new.email)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_insert(e, UniqueField::CompanyTaxId))
    }
}
