use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::instrument;

use super::{InitialValueProvider, ProviderError};

// Stand-in for the HTTP endpoint that seeds new counters.
pub struct SimulatedApi {
    latency: Duration,
}

impl SimulatedApi {
    pub fn new(latency: Duration) -> Self {
        tracing::info!("Creating simulated API with latency: {:?}", latency);
        Self { latency }
    }
}

#[async_trait]
impl InitialValueProvider for SimulatedApi {
    #[instrument(name = "fetch_initial_count", level = "debug", skip(self))]
    async fn fetch_initial_count(&self) -> Result<i64, ProviderError> {
        tokio::time::sleep(self.latency).await;

        let value = rand::thread_rng().gen_range(0..100);
        tracing::info!("Fetched initial count: {}", value);
        Ok(value)
    }
}
