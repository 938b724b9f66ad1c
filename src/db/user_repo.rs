// src/db/user_repo.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    common::error::{AppError, UniqueField},
    models::user::{NewUser, User},
};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // A coluna 'password' fica de fora de propósito.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, access_level, active, created_at
            FROM users
            ORDER BY name ASC, id ASC
            "#,
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    // Cria um novo usuário. E-mail repetido vira DuplicateKey(UserEmail).
    pub async fn create_user(&self, new: &NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, access_level, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, email, access_level, active, created_at
            "#,
        )
            .bind(&new.name)
            .bind(&new.email)
            .bind(&new.password)
            .bind(new.access_level)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_insert(e, UniqueField::UserEmail))
    }
}
