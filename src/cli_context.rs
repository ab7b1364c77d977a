use crate::client::RosterClient;
use crate::config::{load_config, Config};
use crate::error::RosterResult;
use crate::store::RosterStore;
use std::sync::Arc;

/// Central context for CLI operations, owning the configuration and the HTTP client
pub struct CliContext {
    config: Config,
    client: Option<Arc<RosterClient>>,
}

impl CliContext {
    /// Load context from saved configuration and the environment
    pub fn load() -> Self {
        Self {
            config: load_config(),
            client: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get or create the client for the configured endpoints
    pub fn client(&mut self) -> RosterResult<Arc<RosterClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(RosterClient::from_config(&self.config)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// A fresh store configured for this session, not yet loaded
    pub fn new_store(&self) -> RosterStore {
        let mut store = RosterStore::new();
        store.set_assigned_ordering(self.config.assigned_ordering);
        store
    }

    /// A store with both collections fetched
    pub async fn loaded_store(&mut self) -> RosterResult<RosterStore> {
        let client = self.client()?;
        let mut store = self.new_store();
        store.load(client.as_ref()).await?;
        Ok(store)
    }

    /// Swap in a new effective configuration. Nothing is written to disk.
    pub fn replace_config(&mut self, config: Config) {
        self.config = config;
        self.client = None;
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    config: Option<Config>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> CliContext {
        match self.config {
            Some(config) => CliContext { config, client: None },
            None => CliContext::load(),
        }
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
