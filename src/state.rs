use std::sync::Arc;

use crate::{config::Config, storage::MemStorage};

pub struct AppState {
    pub config: Config,
    pub storage: MemStorage,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let storage = MemStorage::new();

        Arc::new(Self { config, storage })
    }
}
