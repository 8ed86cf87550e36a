use std::sync::Arc;

use anyhow::Result;

use super::{config::Config, store::WishStore};

pub struct State {
    pub config: Config,
    pub store: WishStore,
}

impl State {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            store: WishStore::new(),
        })
    }

    pub fn load() -> Result<Arc<Self>> {
        Ok(Self::new(Config::load()?))
    }

    /// Opens the database in the background, requests get `NotReady` until it finishes.
    pub fn spawn_initialize(self: &Arc<Self>) {
        let state = self.clone();

        tokio::spawn(async move {
            if state.store.initialize(&state.config).await.is_err() {
                tracing::error!(
                    "Critical: Could not initialize database. Server cannot handle requests."
                );
            }
        });
    }
}
