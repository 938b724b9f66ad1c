// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    Admin,
    #[default]
    User,
    Operator,
}

// Usuário como aparece nas listagens. A senha nunca é lida de volta.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub access_level: AccessLevel,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    #[schema(example = "admin@empresa.com")]
    pub email: String,
    // Texto puro, como no sistema original. Ver DESIGN.md (questões em aberto).
    pub password: String,
    #[serde(default)]
    pub access_level: AccessLevel,
}

// Debug manual para a senha não vazar em logs.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("access_level", &self.access_level)
            .finish()
    }
}
