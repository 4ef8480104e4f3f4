//! Bounded multi-restart driver.
//!
//! Runs the VNS a fixed number of independent times and keeps the outcome
//! with the fewest triangle-degree collisions, stopping early as soon as a
//! run finds a perfect solution. Each restart draws its initial graph from
//! the shared RNG, so runs differ while the whole sequence stays
//! reproducible from one seed.

use crate::error::Error;
use crate::params::Params;
use crate::vns::{solve, SearchOutcome, StopReason};
use rand::Rng;
use tracing::debug;

/// Run up to `restarts` independent VNS searches and return the best
/// outcome. `restarts` must be at least 1.
pub fn solve_restarts<R>(
    n: usize,
    d: usize,
    restarts: usize,
    rng: &mut R,
    p: &Params,
) -> Result<SearchOutcome, Error>
where
    R: Rng + ?Sized,
{
    assert!(restarts >= 1);

    let mut best: Option<SearchOutcome> = None;
    for run in 0..restarts {
        let out = solve(n, d, rng, p)?;
        debug!(
            run,
            collisions = out.best.collisions(),
            reason = ?out.reason,
            "restart finished"
        );

        let improved = best
            .as_ref()
            .map_or(true, |b| out.best.collisions() < b.best.collisions());
        if improved {
            best = Some(out);
        }
        if matches!(best.as_ref().map(|b| b.reason), Some(StopReason::Perfect)) {
            break;
        }
    }

    // restarts >= 1, so at least one outcome was recorded
    Ok(best.unwrap())
}

/*──────────────────────── tests ───────────────────────────*/

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn keeps_best_across_restarts() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let p = Params::new(2, 1_000);
        let out = solve_restarts(8, 3, 3, &mut rng, &p).unwrap();
        assert!(out.best.graph().is_regular(3));
    }

    #[test]
    fn propagates_invalid_instance() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = solve_restarts(5, 5, 2, &mut rng, &Params::default()).unwrap_err();
        assert_eq!(err, Error::InvalidInstance { n: 5, d: 5 });
    }

    #[test]
    #[should_panic]
    fn zero_restarts_is_a_caller_bug() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let _ = solve_restarts(6, 3, 0, &mut rng, &Params::default());
    }
}
