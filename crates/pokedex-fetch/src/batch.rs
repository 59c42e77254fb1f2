//! Fixed-size batch scheduling.
//!
//! Work items are split into consecutive batches. All items of one batch run
//! concurrently; batches run one after another with a fixed pause after
//! each, which keeps the request rate against the upstream API bounded.

use std::future::Future;
use std::time::Duration;

use futures::future::join_all;
use pokedex_core::config::FetchConfig;
use tracing::info;

/// Batch size and inter-batch pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSchedule {
    /// Items per batch. Zero is treated as one.
    pub size: usize,
    /// Pause after every batch.
    pub delay: Duration,
}

impl Default for BatchSchedule {
    fn default() -> Self {
        Self {
            size: 50,
            delay: Duration::from_millis(100),
        }
    }
}

impl BatchSchedule {
    /// Read the schedule from the `fetch` configuration section.
    pub const fn from_config(config: &FetchConfig) -> Self {
        Self {
            size: config.batch_size,
            delay: Duration::from_millis(config.batch_delay_ms),
        }
    }

    /// Effective batch size (never zero).
    pub fn effective_size(&self) -> usize {
        self.size.max(1)
    }

    /// Number of batches needed for `total` items.
    pub fn batch_count(&self, total: usize) -> usize {
        total.div_ceil(self.effective_size())
    }
}

/// Run `op` over every item in `items`, batch by batch.
///
/// Results are returned in the same order as `items`, one per item. The
/// caller decides what a failed item means.
pub async fn run_batched<'a, T, R, F, Fut>(items: &'a [T], schedule: BatchSchedule, op: F) -> Vec<R>
where
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = R>,
{
    let batches = schedule.batch_count(items.len());
    let mut results = Vec::with_capacity(items.len());

    for (index, batch) in items.chunks(schedule.effective_size()).enumerate() {
        info!(
            batch = index.saturating_add(1),
            batches,
            items = batch.len(),
            "processing batch"
        );
        results.extend(join_all(batch.iter().map(&op)).await);
        tokio::time::sleep(schedule.delay).await;
    }

    results
}
