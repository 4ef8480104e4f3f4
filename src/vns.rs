//! Variable Neighborhood Search controller.
//!
//! Build a random regular graph, descend to a local optimum, then
//! alternate shake and descent: improvements reset the shake strength to
//! 1, stagnation increases it, and a shake deadlock throws the current
//! graph away and regenerates from scratch. Stops on a perfect solution
//! (zero triangle-degree collisions), on the shake budget, or on the time
//! budget.

use crate::diversify::{shake, ShakeOutcome};
use crate::error::Error;
use crate::generate::random_regular;
use crate::neighbour::descend;
use crate::params::Params;
use crate::solution::Solution;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Why a VNS run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// All triangle-degrees distinct.
    Perfect,
    /// Shake strength exceeded `max_shake` without improvement.
    ShakeBudget,
    /// Wall-clock budget exceeded.
    TimeBudget,
}

/// Result of one VNS run: the best solution seen and why the run stopped.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub best: Solution,
    pub reason: StopReason,
    pub elapsed: Duration,
}

/// Run one full VNS search for a d-regular graph on n vertices with
/// pairwise distinct triangle-degrees.
///
/// Fails only when no (n,d)-regular graph exists; deadlocks and exhausted
/// budgets are ordinary outcomes.
pub fn solve<R>(n: usize, d: usize, rng: &mut R, p: &Params) -> Result<SearchOutcome, Error>
where
    R: Rng + ?Sized,
{
    let start = Instant::now();

    let mut current = Solution::new(d, random_regular(n, d, rng)?);
    descend(&mut current);
    let mut best = current.clone();
    info!(
        collisions = best.collisions(),
        value = best.value(),
        "initial descent finished"
    );

    let mut k = 1usize;
    let reason = loop {
        if best.is_perfect() {
            break StopReason::Perfect;
        }
        if k > p.max_shake {
            break StopReason::ShakeBudget;
        }
        if start.elapsed() >= p.max_time {
            break StopReason::TimeBudget;
        }

        match shake(&mut current, k, rng) {
            ShakeOutcome::Shaken => {}
            ShakeOutcome::Deadlock => {
                // no legal switch left anywhere; restart from a fresh graph
                debug!(k, "shake deadlock, regenerating current solution");
                current = Solution::new(d, random_regular(n, d, rng)?);
                k = 1;
            }
        }
        descend(&mut current);

        if current.collisions() < best.collisions() {
            best = current.clone();
            k = 1;
            info!(
                collisions = best.collisions(),
                value = best.value(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "new best solution"
            );
        } else {
            k += 1;
        }
    };

    let elapsed = start.elapsed();
    info!(?reason, collisions = best.collisions(), "search finished");
    Ok(SearchOutcome { best, reason, elapsed })
}

/*──────────────────────── tests ───────────────────────────*/

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn infeasible_instance_is_fatal() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = solve(5, 3, &mut rng, &Params::default()).unwrap_err();
        assert_eq!(err, Error::InvalidInstance { n: 5, d: 3 });
    }

    #[test]
    fn zero_shake_budget_descends_once() {
        // C4 is the only 2-regular graph on 4 vertices; all triangle-degrees
        // are 0, so no improvement is ever possible and the run must return
        // right after the initial descent.
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let p = Params::new(0, 100_000);
        let out = solve(4, 2, &mut rng, &p).unwrap();
        assert_eq!(out.reason, StopReason::ShakeBudget);
        assert_eq!(out.best.collisions(), 6);
        assert!(out.best.graph().is_regular(2));
    }

    #[test]
    fn time_budget_zero_stops_after_first_descent() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let p = Params::new(100, 0);
        let out = solve(8, 3, &mut rng, &p).unwrap();
        assert_eq!(out.reason, StopReason::TimeBudget);
        assert!(out.best.graph().is_regular(3));
    }

    #[test]
    fn outcome_graph_is_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let p = Params::new(5, 2_000);
        let out = solve(6, 3, &mut rng, &p).unwrap();

        let g = out.best.graph();
        assert!(g.is_regular(3));
        for u in 0..g.n() {
            assert!(!g.has_edge(u, u));
            for v in 0..g.n() {
                assert_eq!(g.has_edge(u, v), g.has_edge(v, u));
            }
        }
        // derived fields stay consistent with the returned graph
        assert_eq!(
            out.best.triangle_degrees(),
            &crate::evaluate::triangle_degrees(g)[..]
        );
    }
}
