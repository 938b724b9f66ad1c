// src/models/company.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::form::blank_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub legal_name: String,          // Razão social
    pub trade_name: Option<String>,  // Nome fantasia
    pub tax_id: Option<String>,      // CNPJ (UNIQUE)
    pub state_registration: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Dados para cadastrar uma nova empresa
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    #[schema(example = "Comercial Exemplo Ltda")]
    pub legal_name: String,
    #[serde(default)]
    pub trade_name: Option<String>,
    // Só a chave UNIQUE troca "" por NULL; o resto é gravado como veio.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "12.345.678/0001-99")]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub state_registration: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
