//! Diversification: random degree-preserving switches to escape a local
//! optimum.
//!
//! Each of the `strength` switches first tries a fast path: sample a vertex
//! pair (u,v) and draw s,t from the legal candidate sets of that specific
//! pair. After ten failed attempts it falls back to enumerating every legal
//! switch in the graph and sampling one uniformly. An empty enumeration
//! means the graph admits no legal switch at all — a deadlock that aborts
//! the whole shake and tells the caller to discard the solution.

use crate::graph::{Graph, Switch};
use crate::solution::Solution;
use rand::seq::SliceRandom;
use rand::Rng;

/// Random (u,v) draws tried before falling back to full enumeration.
const MAX_RANDOM_TRIALS: usize = 10;

/// Result of a shake call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShakeOutcome {
    /// All requested switches were applied.
    Shaken,
    /// The graph admits no legal switch; the solution should be discarded.
    Deadlock,
}

/// Apply `strength` independent random legal switches to `sol`.
pub fn shake<R>(sol: &mut Solution, strength: usize, rng: &mut R) -> ShakeOutcome
where
    R: Rng + ?Sized,
{
    for _ in 0..strength {
        if !shake_once(sol, rng) {
            return ShakeOutcome::Deadlock;
        }
    }
    ShakeOutcome::Shaken
}

/// One random switch; false on deadlock.
fn shake_once<R>(sol: &mut Solution, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    let n = sol.n();
    if n < 4 {
        return false;
    }

    for _ in 0..MAX_RANDOM_TRIALS {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }

        let g = sol.graph();
        let scand: Vec<usize> = (0..n)
            .filter(|&s| s != u && s != v && g.has_edge(u, s) && !g.has_edge(v, s))
            .collect();
        let tcand: Vec<usize> = (0..n)
            .filter(|&t| t != u && t != v && !g.has_edge(u, t) && g.has_edge(v, t))
            .collect();
        if scand.is_empty() || tcand.is_empty() {
            continue;
        }

        let s = *scand.choose(rng).unwrap();
        let t = *tcand.choose(rng).unwrap();
        if s == t {
            // s==t would drop regularity; count as a failed draw
            continue;
        }

        sol.apply_switch(Switch::new(u, v, s, t));
        return true;
    }

    // random draws kept missing; enumerate every legal switch instead
    let all = enumerate_switches(sol.graph());
    match all.choose(rng) {
        Some(&sw) => {
            sol.apply_switch(sw);
            true
        }
        None => false,
    }
}

/// All legal switches of `g`, in (u,v,s,t) enumeration order with u < v.
pub fn enumerate_switches(g: &Graph) -> Vec<Switch> {
    let n = g.n();
    let mut out = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            for s in 0..n {
                if s == u || s == v {
                    continue;
                }
                if !g.has_edge(u, s) || g.has_edge(v, s) {
                    continue;
                }
                for t in 0..n {
                    if t == u || t == v || t == s {
                        continue;
                    }
                    if g.has_edge(u, t) || !g.has_edge(v, t) {
                        continue;
                    }
                    out.push(Switch::new(u, v, s, t));
                }
            }
        }
    }
    out
}

/*──────────────────────── tests ───────────────────────────*/
