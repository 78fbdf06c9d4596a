//! Request latency recording

use std::time::Instant;

/// Histogram receiving one sample per handled request, in seconds
pub const REQUEST_HISTOGRAM: &str = "intents.rest.request";

/// Records elapsed time under `op` when dropped, so early returns are counted too
pub struct Timed {
    op: &'static str,
    start: Instant,
}

impl Timed {
    /// Start timing an operation
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        metrics::histogram!(REQUEST_HISTOGRAM, "op" => self.op)
            .record(self.start.elapsed().as_secs_f64());
    }
}
