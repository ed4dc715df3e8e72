//! Aggregate statistics for a simulation run.

/// Monotone counters accumulated while replaying a trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of branch events processed.
    pub branches: usize,

    /// Number of events that reached the direction predictor.
    pub predictions: usize,

    /// Mispredictions from the active direction predictor.
    pub mispredictions: usize,

    /// Events that missed the target cache while actually taken.
    pub btb_miss_taken: usize,
}

impl SimStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction-predictor mispredictions plus BTB miss-while-taken events.
    pub fn total_mispredictions(&self) -> usize {
        self.mispredictions + self.btb_miss_taken
    }

    /// Total mispredictions over branches processed; 0.0 for an empty run.
    pub fn misprediction_rate(&self) -> f64 {
        if self.branches == 0 {
            return 0.0;
        }
        self.total_mispredictions() as f64 / self.branches as f64
    }
}
