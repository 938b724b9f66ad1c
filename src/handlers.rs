// src/handlers.rs

pub mod companies;
pub mod dashboard;
pub mod inventory;
pub mod people;
pub mod users;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::i18n::{self, Message};
use crate::middleware::i18n::Locale;

// Resposta de cadastro: a mensagem de sucesso (o antigo "flash") + o registro gravado.
#[derive(Debug, Serialize, ToSchema)]
pub struct Created<T> {
    pub message: String,
    pub data: T,
}

pub(crate) fn created<T: Serialize>(
    message: Message,
    locale: &Locale,
    data: T,
) -> (StatusCode, Json<Created<T>>) {
    let body = Created {
        message: i18n::translate(message, locale).to_string(),
        data,
    };
    (StatusCode::CREATED, Json(body))
}
