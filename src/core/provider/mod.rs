pub mod simulated;

pub use simulated::SimulatedApi;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("initial count request failed: {reason}")]
    Unavailable { reason: String },
}

// Boundary to the external source of starting values. Implementations may
// be slow and may fail; callers get the failure unchanged.
#[async_trait]
pub trait InitialValueProvider: Send + Sync {
    async fn fetch_initial_count(&self) -> Result<i64, ProviderError>;
}
