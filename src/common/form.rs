// src/common/form.rs

use serde::{Deserialize, Deserializer};

/// Para as chaves UNIQUE opcionais (CNPJ, CPF, código): ausente, `null` ou só espaços viram `None`.
/// Um "" gravado colidiria com o próximo "" na mesma coluna.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}
