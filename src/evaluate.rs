//! Triangle-degree evaluation.
//!
//! The triangle-degree of vertex i is half the (i,i) entry of A³: closed
//! walks of length 3 count each triangle through i twice. Only the diagonal
//! is needed, so instead of cubing the matrix we count, per vertex, the
//! edges inside its neighbourhood — exact integer arithmetic throughout.
//!
//! Pure functions: safe to call on hypothetical scratch graphs, never
//! touches shared state, fresh result each call.

use crate::graph::Graph;

/// Derived quantities of one graph: per-vertex triangle-degrees, the number
/// of vertex pairs sharing a triangle-degree, and the spread objective.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Entry i = number of triangles through vertex i, in vertex order.
    pub td: Vec<usize>,
    /// Unordered pairs (i,j) with td\[i\] == td\[j\].
    pub neqtd: usize,
    /// Spread objective; smaller is better. See [`objective`].
    pub value: f64,
}

/// Full evaluation of a graph.
pub fn evaluate(g: &Graph) -> Evaluation {
    let td = triangle_degrees(g);
    let neqtd = collision_pairs(&td);
    let value = objective(&td, g.n());
    Evaluation { td, neqtd, value }
}

/// Per-vertex triangle counts.
pub fn triangle_degrees(g: &Graph) -> Vec<usize> {
    let n = g.n();
    let mut td = vec![0usize; n];
    for i in 0..n {
        // twice the number of triangles through i: ordered pairs (k,l) of
        // neighbours of i that are themselves adjacent
        let mut walks = 0usize;
        for k in g.neigh_row(i).iter_ones() {
            walks += g
                .neigh_row(k)
                .iter_ones()
                .filter(|&l| g.neigh_row(i)[l])
                .count();
        }
        td[i] = walks / 2;
    }
    td
}

/// Number of unordered index pairs with equal triangle-degree.
pub fn collision_pairs(td: &[usize]) -> usize {
    let n = td.len();
    let mut neqtd = 0usize;
    for i in 0..n {
        for j in i + 1..n {
            if td[i] == td[j] {
                neqtd += 1;
            }
        }
    }
    neqtd
}

/// Spread objective: sort the sequence ascending and sum 1/(gap + 1/n)
/// over consecutive entries. Zero gaps contribute the maximal term n, so
/// minimizing this value pushes the triangle-degrees apart. `n` is the
/// vertex count of the underlying graph, regularizing the zero-gap case.
pub fn objective(td: &[usize], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let mut sorted = td.to_vec();
    sorted.sort_unstable();
    let reg = 1.0 / n as f64;
    let mut value = 0.0;
    for w in sorted.windows(2) {
        value += 1.0 / ((w[1] - w[0]) as f64 + reg);
    }
    value
}

/// Value-only fast path for the descent hot loop.
#[inline]
pub fn objective_of(g: &Graph) -> f64 {
    objective(&triangle_degrees(g), g.n())
}

/*──────────────────────── tests ───────────────────────────*/
