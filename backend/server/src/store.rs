//! # Wish Store
//!
//! List, create and delete over the `wishes` table.
//!
//! ## Readiness
//!
//! The pool is opened after the server is already listening, so the store walks through
//! `Uninitialized -> Ready` (or `Failed`) while requests may be arriving.
//!
//! - Every operation answers [`StoreError::NotReady`] until the state is `Ready`
//! - `initialize` is idempotent, a `Ready` store returns straight away
//! - A `Failed` store can be initialized again
//!
//! ## Failures
//! - Connectivity and query errors come back as [`StoreError::StorageUnavailable`]
//! - Nothing is retried here, retrying is up to the caller
//! - Deleting a missing id is not an error
use sqlx::SqlitePool;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};
use wishes::{CreatedWish, Wish};

use crate::{
    config::Config,
    database::{create_schema, init_pool},
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database not initialized yet.")]
    NotReady,

    #[error("Content is required")]
    InvalidInput,

    #[error("{0}")]
    StorageUnavailable(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Uninitialized,
    Ready,
    Failed(String),
}

enum PoolState {
    Uninitialized,
    Ready(SqlitePool),
    Failed(String),
}

pub struct WishStore {
    state: RwLock<PoolState>,
    opening: Mutex<()>,
}

impl Default for WishStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WishStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PoolState::Uninitialized),
            opening: Mutex::new(()),
        }
    }

    pub async fn initialize(&self, config: &Config) -> Result<(), StoreError> {
        // Only one opener at a time, readers keep getting `NotReady` meanwhile.
        let _opening = self.opening.lock().await;

        if let PoolState::Ready(_) = *self.state.read().await {
            return Ok(());
        }

        match open(config).await {
            Ok(pool) => {
                info!("Database and table initialized successfully");
                *self.state.write().await = PoolState::Ready(pool);

                Ok(())
            }
            Err(e) => {
                error!("Error during database initialization: {e}");
                *self.state.write().await = PoolState::Failed(e.to_string());

                Err(e.into())
            }
        }
    }

    pub async fn readiness(&self) -> Readiness {
        match &*self.state.read().await {
            PoolState::Uninitialized => Readiness::Uninitialized,
            PoolState::Ready(_) => Readiness::Ready,
            PoolState::Failed(reason) => Readiness::Failed(reason.clone()),
        }
    }

    pub async fn list(&self) -> Result<Vec<Wish>, StoreError> {
        let pool = self.pool().await?;

        let wishes = sqlx::query_as::<_, Wish>(
            "SELECT id, content, created_at FROM wishes ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&pool)
        .await?;

        Ok(wishes)
    }

    pub async fn create(&self, content: &str) -> Result<CreatedWish, StoreError> {
        if content.trim().is_empty() {
            return Err(StoreError::InvalidInput);
        }

        let pool = self.pool().await?;
        let result = sqlx::query("INSERT INTO wishes (content) VALUES (?)")
            .bind(content)
            .execute(&pool)
            .await?;

        Ok(CreatedWish {
            id: result.last_insert_rowid(),
            content: content.to_string(),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let pool = self.pool().await?;

        sqlx::query("DELETE FROM wishes WHERE id = ?")
            .bind(id)
            .execute(&pool)
            .await?;

        Ok(())
    }

    /// Closes the pool on shutdown, the store goes back to `Uninitialized`.
    pub async fn close(&self) {
        let mut state = self.state.write().await;

        if let PoolState::Ready(pool) = &*state {
            pool.close().await;
        }

        *state = PoolState::Uninitialized;
    }

    async fn pool(&self) -> Result<SqlitePool, StoreError> {
        match &*self.state.read().await {
            PoolState::Ready(pool) => Ok(pool.clone()),
            _ => Err(StoreError::NotReady),
        }
    }
}

async fn open(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let pool = init_pool(config).await?;
    create_schema(&pool).await?;

    Ok(pool)
}
