// src/common/i18n.rs

use crate::common::error::UniqueField;
use crate::middleware::i18n::Locale;

// Todas as mensagens que o usuário pode ver (sucesso e erro).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CompanyCreated,
    PersonCreated,
    UserCreated,
    ItemCreated,
    MovementCreated,
    Duplicate(UniqueField),
    ItemNotFound,
    Unexpected,
}

// Textos em português seguem as mensagens originais do sistema.
fn pt(message: Message) -> &'static str {
    match message {
        Message::CompanyCreated => "Empresa cadastrada com sucesso!",
        Message::PersonCreated => "Pessoa cadastrada com sucesso!",
        Message::UserCreated => "Usuário cadastrado com sucesso!",
        Message::ItemCreated => "Mercadoria cadastrada com sucesso!",
        Message::MovementCreated => "Movimentação registrada com sucesso!",
        Message::Duplicate(UniqueField::CompanyTaxId) => "CNPJ já cadastrado!",
        Message::Duplicate(UniqueField::PersonTaxId) => "CPF já cadastrado!",
        Message::Duplicate(UniqueField::UserEmail) => "Email já cadastrado!",
        Message::Duplicate(UniqueField::ItemCode) => "Código já cadastrado!",
        Message::ItemNotFound => "Mercadoria não encontrada!",
        Message::Unexpected => "Ocorreu um erro inesperado.",
    }
}

fn en(message: Message) -> &'static str {
    match message {
        Message::CompanyCreated => "Company created successfully!",
        Message::PersonCreated => "Person created successfully!",
        Message::UserCreated => "User created successfully!",
        Message::ItemCreated => "Item created successfully!",
        Message::MovementCreated => "Stock movement recorded successfully!",
        Message::Duplicate(UniqueField::CompanyTaxId) => "Company tax id already registered!",
        Message::Duplicate(UniqueField::PersonTaxId) => "Person tax id already registered!",
        Message::Duplicate(UniqueField::UserEmail) => "Email already registered!",
        Message::Duplicate(UniqueField::ItemCode) => "Item code already registered!",
        Message::ItemNotFound => "Item not found!",
        Message::Unexpected => "An unexpected error occurred.",
    }
}

/// Busca o texto no idioma do cliente. Idioma desconhecido cai no inglês.
pub fn translate(message: Message, locale: &Locale) -> &'static str {
    match locale.0.as_str() {
        "pt" => pt(message),
        _ => en(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_english() {
        let text = translate(Message::ItemCreated, &Locale("de".to_string()));
        assert_eq!(text, "Item created successfully!");
    }

    #[test]
    fn portuguese_uses_original_wording() {
        let locale = Locale("pt".to_string());
        assert_eq!(translate(Message::Duplicate(UniqueField::UserEmail), &locale), "Email já cadastrado!");
        assert_eq!(translate(Message::MovementCreated, &locale), "Movimentação registrada com sucesso!");
    }
}
