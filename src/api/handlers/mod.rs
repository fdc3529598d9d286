use crate::config::AppConfig;
use crate::database::SqliteStore;

pub mod feed;
pub mod league;
pub mod matches;

pub struct AppState {
    pub store: SqliteStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: SqliteStore, config: AppConfig) -> Self {
        Self { store, config }
    }
}
