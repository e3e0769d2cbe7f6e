use std::time::{Duration, Instant};

/// Statistics for one pipeline run (single text or batch).
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Total execution time, model call included.
    pub total_time: Duration,
    /// Number of texts processed.
    pub items_processed: usize,
}

impl PipelineStats {
    /// Create a new stats tracker (call at start of operation).
    pub(crate) fn start() -> PipelineStatsBuilder {
        PipelineStatsBuilder {
            start_time: Instant::now(),
        }
    }
}

/// Tracks timing from creation to finish.
pub(crate) struct PipelineStatsBuilder {
    start_time: Instant,
}

impl PipelineStatsBuilder {
    /// Finalize stats with the number of items processed.
    pub fn finish(self, items_processed: usize) -> PipelineStats {
        PipelineStats {
            total_time: self.start_time.elapsed(),
            items_processed,
        }
    }

    #[cfg(test)]
    pub(crate) fn started_at(start_time: Instant) -> Self {
        Self { start_time }
    }
}

#[cfg(test)]
mod tests {
    use super::{PipelineStats, PipelineStatsBuilder};
    use std::time::{Duration, Instant};

    #[test]
    fn records_item_count_and_elapsed_time() {
        let start = Instant::now() - Duration::from_millis(250);
        let stats = PipelineStatsBuilder::started_at(start).finish(3);

        assert_eq!(stats.items_processed, 3);
        assert!(stats.total_time >= Duration::from_millis(250));
    }

    #[test]
    fn fresh_tracker_reports_zero_items() {
        let stats = PipelineStats::start().finish(0);
        assert_eq!(stats.items_processed, 0);
    }
}
