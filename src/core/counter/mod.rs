pub mod command;
pub mod store;

pub use store::CounterStore;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: u64,
    pub count: i64,
}

impl Counter {
    pub fn new(id: u64, count: i64) -> Self {
        tracing::info!("Creating counter {} with initial value: {}", id, count);
        Self { id, count }
    }
}
