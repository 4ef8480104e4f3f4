//! Parameter bundle for the VNS controller.
//!
//! Defaults mirror the intended operating point: shake strength may grow
//! to 100 before the search gives up, and a run is cut off after 100
//! seconds of wall-clock time. Both budgets are checked once per outer
//! iteration, so a single descent may overrun the time budget before the
//! controller notices.

use std::time::Duration;

/// All tunable controls for the search.
#[derive(Clone, Debug)]
pub struct Params {
    /// Maximum shake strength k; the search stops once k would exceed it.
    /// A value of 0 means a single descent from the initial graph.
    pub max_shake: usize,

    /// Wall-clock budget for one VNS run, polled between iterations.
    pub max_time: Duration,
}

impl Params {
    /// Budgets from the caller's raw numbers (milliseconds for time).
    pub fn new(max_shake: usize, max_time_ms: u64) -> Self {
        Self {
            max_shake,
            max_time: Duration::from_millis(max_time_ms),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_shake: 100,
            max_time: Duration::from_millis(100_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let p = Params::default();
        assert_eq!(p.max_shake, 100);
        assert_eq!(p.max_time, Duration::from_secs(100));
    }

    #[test]
    fn millis_constructor() {
        let p = Params::new(10, 2_500);
        assert_eq!(p.max_shake, 10);
        assert_eq!(p.max_time, Duration::from_millis(2_500));
    }
}
