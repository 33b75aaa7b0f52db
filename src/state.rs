use crate::config::AppConfig;
use crate::store::{MemoryStore, RecordStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        // Records live with the external store; this process keeps an
        // in-memory stand-in until an adapter is plugged in.
        tracing::warn!("using in-memory record store; data is lost on restart");
        let store = Arc::new(MemoryStore::new()) as Arc<dyn RecordStore>;

        Ok(Self { config, store })
    }

    pub fn fake() -> Self {
        Self {
            config: Arc::new(AppConfig::default()),
            store: Arc::new(MemoryStore::new()) as Arc<dyn RecordStore>,
        }
    }
}
