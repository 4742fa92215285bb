use std::sync::Arc;

use tracing::{info, instrument};

use crate::core::counter::{Counter, CounterStore};
use crate::core::provider::{InitialValueProvider, ProviderError};

pub struct CounterSession {
    store: CounterStore,
    provider: Arc<dyn InitialValueProvider>,
    predefined_value: Option<i64>,
    loading: bool,
}

impl CounterSession {
    pub fn new(provider: Arc<dyn InitialValueProvider>, predefined_value: Option<i64>) -> Self {
        info!("Creating counter session, predefined value: {:?}", predefined_value);
        Self {
            store: CounterStore::new(),
            provider,
            predefined_value,
            loading: true,
        }
    }

    // Seeds the first counter. The loading flag clears once the initial value
    // has resolved, whether or not the fetch succeeded.
    #[instrument(name = "session_start", level = "info", skip(self))]
    pub async fn start(&mut self) -> Result<(), ProviderError> {
        let resolved = self.resolve_initial_value().await;
        self.loading = false;

        let value = resolved?;
        self.store.add(value);
        info!("Session started with first counter value: {}", value);
        Ok(())
    }

    #[instrument(name = "session_add_counter", level = "info", skip(self))]
    pub async fn add_counter(&mut self) -> Result<u64, ProviderError> {
        let value = self.resolve_initial_value().await?;
        let id = self.store.add(value);
        Ok(id)
    }

    pub fn increment(&mut self, id: u64) {
        self.store.increment(id);
    }

    pub fn decrement(&mut self, id: u64) {
        self.store.decrement(id);
    }

    pub fn randomize(&mut self, id: u64) {
        self.store.randomize(id);
    }

    pub fn counters(&self) -> &[Counter] {
        self.store.counters()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // The predefined value always wins; without one, every call makes a
    // fresh fetch.
    async fn resolve_initial_value(&self) -> Result<i64, ProviderError> {
        match self.predefined_value {
            Some(value) => Ok(value),
            None => match self.provider.fetch_initial_count().await {
                Ok(value) => Ok(value),
                Err(e) => {
                    tracing::error!("Failed to fetch initial count: {:?}", e);
                    Err(e)
                }
            },
        }
    }
}
