use tracing::debug;

/// Owner of the counter state.
///
/// Every operation is infallible. Access is single-threaded.
pub trait CounterModel {
    /// Current count. No side effects.
    fn count(&self) -> u64;

    /// Adds one to the count, saturating at `u64::MAX`.
    fn increment(&mut self);

    /// Sets the count back to zero.
    fn reset(&mut self);
}

/// In-memory counter starting at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterModel for Counter {
    fn count(&self) -> u64 {
        self.count
    }

    fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
        debug!(target: "counter::model", count = self.count, "incremented");
    }

    fn reset(&mut self) {
        self.count = 0;
        debug!(target: "counter::model", "reset");
    }
}
