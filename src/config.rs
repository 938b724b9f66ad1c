// src/config.rs

use std::env;

use anyhow::Context;
use sqlx::SqlitePool;

use crate::common::db_utils;
use crate::db::{
    CompanyRepository, DashboardRepository, InventoryRepository, PersonRepository,
    UserRepository,
};

const DEFAULT_DATABASE_URL: &str = "sqlite://erp_system.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Configuração lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado de `from_env` para os testes não mexerem nas variáveis do processo.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: {raw:?}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        anyhow::ensure!(max_connections > 0, "DATABASE_MAX_CONNECTIONS deve ser maior que zero");

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub company_repo: CompanyRepository,
    pub person_repo: PersonRepository,
    pub user_repo: UserRepository,
    pub inventory_repo: InventoryRepository,
    pub dashboard_repo: DashboardRepository,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = db_utils::connect_pool(config)
            .await
            .with_context(|| format!("Falha ao conectar em {}", config.database_url))?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        Self {
            company_repo: CompanyRepository::new(db_pool.clone()),
            person_repo: PersonRepository::new(db_pool.clone()),
            user_repo: UserRepository::new(db_pool.clone()),
            inventory_repo: InventoryRepository::new(db_pool.clone()),
            dashboard_repo: DashboardRepository::new(db_pool.clone()),
            db_pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_url, "sqlite://erp_system.db");
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://outro.db"),
            ("DATABASE_MAX_CONNECTIONS", "8"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite://outro.db");
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn rejects_bad_pool_size() {
        assert!(Config::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "muitas")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")])).is_err());
    }
}
