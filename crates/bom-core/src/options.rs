/// Scheduling options for an enrichment job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Number of rows looked up concurrently. `0` and `1` both mean strictly
    /// sequential processing.
    pub workers: usize,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self { workers: 1 }
    }
}

impl EnrichOptions {
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.workers > 1
    }
}
