//! # SQLite
//!
//! Durable storage for the wish board.
//!
//! Core purpose is to keep the list of wishes. Nothing else is stored.
//!
//! ## Requirements
//!
//! - A single table, no joins
//! - Small dataset, a party's worth of wishes
//! - Ordered reads by insertion time
//! - Bounded number of open connections
//!
//! ## Implementation
//!
//! - `wishes` table: auto-assigned integer key, required text, default-now timestamp
//! - The database file is created on first start if it does not exist yet
//! - sqlx pool caps concurrent connections at `DB_MAX_CONNECTIONS`
//! - `CURRENT_TIMESTAMP` only has second precision, so reads break ties on `id`
use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::config::Config;

pub const WISHES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS wishes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

pub async fn init_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_millis(config.acquire_timeout_ms))
        .connect_with(options)
        .await
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(WISHES_TABLE).execute(pool).await?;

    Ok(())
}
