use rand::Rng;
use tracing::instrument;

use super::Counter;

#[derive(Debug)]
pub struct CounterStore {
    counters: Vec<Counter>,
}

impl CounterStore {
    pub fn new() -> Self {
        tracing::info!("Creating an empty counter store");
        Self { counters: Vec::new() }
    }

    // Ids are assigned from the collection length. Safe while there is no
    // remove operation; a delete would require a monotonic id source instead.
    #[instrument(name = "add_counter", level = "debug", skip(self))]
    pub fn add(&mut self, value: i64) -> u64 {
        let id = self.counters.len() as u64 + 1;
        self.counters.push(Counter::new(id, value));
        id
    }

    #[instrument(name = "increment_counter", level = "debug", skip(self))]
    pub fn increment(&mut self, id: u64) {
        if let Some(counter) = self.find_mut(id) {
            counter.count += 1;
            tracing::info!("Counter {} incremented to: {}", id, counter.count);
        }
    }

    #[instrument(name = "decrement_counter", level = "debug", skip(self))]
    pub fn decrement(&mut self, id: u64) {
        if let Some(counter) = self.find_mut(id) {
            counter.count -= 1;
            tracing::info!("Counter {} decremented to: {}", id, counter.count);
        }
    }

    #[instrument(name = "randomize_counter", level = "debug", skip(self))]
    pub fn randomize(&mut self, id: u64) {
        if let Some(counter) = self.find_mut(id) {
            counter.count = rand::thread_rng().gen_range(0..100);
            tracing::info!("Counter {} randomized to: {}", id, counter.count);
        }
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    // Mutations on an unknown id are silent no-ops, not errors.
    fn find_mut(&mut self, id: u64) -> Option<&mut Counter> {
        self.counters.iter_mut().find(|counter| counter.id == id)
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}
