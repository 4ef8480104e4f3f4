//! Random d-regular graph construction.
//!
//! Randomized pairing model with local repair: repeatedly scan a fresh
//! random permutation for two degree-deficient, non-adjacent vertices and
//! connect them; when only adjacent (or lone) deficient vertices remain,
//! rewire an existing edge so their degrees can still grow. Termination is
//! probabilistic but reaches a valid graph quickly for feasible (n,d).

use crate::{error::Error, graph::Graph};
use rand::seq::SliceRandom;
use rand::Rng;

/// Outcome of one permutation scan.
enum Scan {
    /// An edge was added; rescan with a fresh permutation.
    EdgeAdded,
    /// All vertices have reached degree d.
    Complete,
    /// One deficient vertex with no deficient partner at all.
    Stuck(usize),
    /// Two deficient vertices, every pairing between them already an edge.
    StuckPair(usize, usize),
}

/// Build a random d-regular graph on `n` vertices.
///
/// Fails with [`Error::InvalidInstance`] when no such graph can exist:
/// `n` and `d` both odd (handshake lemma), or `n <= d`.
pub fn random_regular<R>(n: usize, d: usize, rng: &mut R) -> Result<Graph, Error>
where
    R: Rng + ?Sized,
{
    if d % 2 != 0 && n % 2 != 0 {
        return Err(Error::InvalidInstance { n, d });
    }
    if n <= d {
        return Err(Error::InvalidInstance { n, d });
    }

    let mut g = Graph::with_vertices(n);
    let mut deg = vec![0usize; n];
    let mut perm: Vec<usize> = (0..n).collect();

    loop {
        perm.shuffle(rng);
        match scan(&mut g, &mut deg, &perm, d) {
            Scan::EdgeAdded => {}
            Scan::Complete => return Ok(g),
            Scan::Stuck(r) => {
                repair_single(&mut g, &mut deg, &perm, r);
            }
            Scan::StuckPair(r, s) => {
                repair_pair(&mut g, &mut deg, &perm, r, s);
            }
        }
        // Repairs that found no applicable edge simply retry with a fresh
        // permutation; the graph state is unchanged in that case.
    }
}

/// One pass over the permutation: connect the first deficient non-adjacent
/// pair found, otherwise report which vertices are stuck.
fn scan(g: &mut Graph, deg: &mut [usize], perm: &[usize], d: usize) -> Scan {
    let n = perm.len();
    let mut single: Option<usize> = None;
    let mut pair: Option<(usize, usize)> = None;

    for i in 0..n {
        let v = perm[i];
        if deg[v] >= d {
            continue;
        }
        single = Some(v);
        for j in i + 1..n {
            let u = perm[j];
            if deg[u] >= d {
                continue;
            }
            if !g.has_edge(v, u) {
                g.add_edge(v, u);
                deg[v] += 1;
                deg[u] += 1;
                return Scan::EdgeAdded;
            }
            // Both deficient but already adjacent; remember the last such pair.
            pair = Some((v, u));
        }
    }

    match (pair, single) {
        (Some((r, s)), _) => Scan::StuckPair(r, s),
        (None, Some(r)) => Scan::Stuck(r),
        (None, None) => Scan::Complete,
    }
}

/// Lone stuck vertex r: find an edge (p,q) with r adjacent to neither
/// endpoint, replace it by (r,p) and (r,q). Raises deg[r] by 2 and leaves
/// p and q unchanged. Returns false when no such edge exists in this
/// permutation order.
fn repair_single(g: &mut Graph, deg: &mut [usize], perm: &[usize], r: usize) -> bool {
    let n = perm.len();
    for i in 0..n.saturating_sub(1) {
        let p = perm[i];
        if p == r || g.has_edge(r, p) {
            continue;
        }
        for j in i + 1..n {
            let q = perm[j];
            if q == r {
                continue;
            }
            if g.has_edge(p, q) && !g.has_edge(r, q) {
                g.remove_edge(p, q);
                g.add_edge(r, p);
                g.add_edge(r, q);
                deg[r] += 2;
                return true;
            }
        }
    }
    false
}

/// Stuck adjacent pair (r,s): find an edge (p,q) with p non-adjacent to r
/// and q non-adjacent to s (p,q outside {r,s}), replace it by (r,p) and
/// (s,q). Raises both r and s by 1. Returns false when no such edge exists.
fn repair_pair(g: &mut Graph, deg: &mut [usize], perm: &[usize], r: usize, s: usize) -> bool {
    let n = perm.len();
    for i in 0..n {
        let p = perm[i];
        if p == r || p == s || g.has_edge(r, p) {
            continue;
        }
        for j in 0..n {
            let q = perm[j];
            if q == r || q == s || q == p {
                continue;
            }
            if g.has_edge(p, q) && !g.has_edge(s, q) {
                g.remove_edge(p, q);
                g.add_edge(r, p);
                g.add_edge(s, q);
                deg[r] += 1;
                deg[s] += 1;
                return true;
            }
        }
    }
    false
}

/*──────────────────────── tests ───────────────────────────*/
