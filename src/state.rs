use std::sync::Arc;

use crate::config::Config;
use crate::relay::ChatRelay;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let relay = Arc::new(ChatRelay::from_config(&config.relay)?);
        Ok(Self { config, relay })
    }
}
