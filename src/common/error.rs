// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::common::i18n::{self, Message};
use crate::middleware::i18n::Locale;

// Qual coluna UNIQUE colidiu. Cada cadastro mestre tem exatamente uma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    CompanyTaxId,
    PersonTaxId,
    UserEmail,
    ItemCode,
}

impl UniqueField {
    pub fn column(&self) -> &'static str {
        match self {
            UniqueField::CompanyTaxId => "companies.tax_id",
            UniqueField::PersonTaxId => "people.tax_id",
            UniqueField::UserEmail => "users.email",
            UniqueField::ItemCode => "items.code",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Chave duplicada: {}", .0.column())]
    DuplicateKey(UniqueField),

    /// Violação de chave estrangeira: a movimentação aponta para uma mercadoria que não existe.
    #[error("Mercadoria {0} não encontrada")]
    ForeignKeyViolation(i64),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Traduz um erro de INSERT: UNIQUE vira `DuplicateKey(field)`, o resto segue como erro de banco.
    pub fn from_insert(err: sqlx::Error, field: UniqueField) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return AppError::DuplicateKey(field);
            }
        }
        err.into()
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::ForeignKeyViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converte o erro de domínio na resposta HTTP, já no idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let message = match self {
            AppError::DuplicateKey(field) => Message::Duplicate(*field),
            AppError::ForeignKeyViolation(_) => Message::ItemNotFound,
            e => {
                // O detalhe vai só para o log, nunca para o cliente.
                tracing::error!("Erro Interno do Servidor: {}", e);
                Message::Unexpected
            }
        };

        ApiError {
            status: self.status(),
            message: i18n::translate(message, locale).to_string(),
        }
    }
}

// O erro já "renderizado": status + mensagem traduzida.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

// Corpo de toda resposta de erro: {"error": "..."}
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "CNPJ já cadastrado!")]
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse { error: self.message });
        (self.status, body).into_response()
    }
}
