// src/db/person_repo.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    common::error::{AppError, UniqueField},
    models::person::{NewPerson, Person},
};

#[derive(Clone)]
pub struct PersonRepository {
    pool: SqlitePool,
}

impl PersonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_people(&self) -> Result<Vec<Person>, AppError> {
        let people = sqlx::query_as::<_, Person>("SELECT * FROM people ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(people)
    }

    /// Cadastra cliente, fornecedor ou funcionário. CPF repetido é rejeitado.
    pub async fn create_person(&self, new: &NewPerson) -> Result<Person, AppError> {
        sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO people (
                name, tax_id, id_document, address, phone, email,
                birth_date, kind, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(&new.name)
            .bind(&new.tax_id)
            .bind(&new.id_document)
            .bind(&new.address)
            .bind(&new.phone)
            .bind(&new.email)
            .bind(new.birth_date)
            .bind(new.kind)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_insert(e, UniqueField::PersonTaxId))
    }
}
