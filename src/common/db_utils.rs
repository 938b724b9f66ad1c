// src/common/db_utils.rs

use std::{str::FromStr, time::Duration};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;

// ---
// Pool de conexões
// ---
/// Cada operação pega uma conexão da pool e a devolve ao sair (sucesso ou erro).
/// As chaves estrangeiras ficam ligadas em todas as conexões.
pub async fn connect_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3));

    // Banco em memória: cada conexão teria o seu próprio banco vazio.
    if is_in_memory(&config.database_url) {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_options.connect_with(options).await
}

/// Cria as tabelas se não existirem. Idempotente: pode rodar a cada inicialização.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:erp?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://erp_system.db"));
    }
}
