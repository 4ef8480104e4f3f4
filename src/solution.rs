//! Candidate solution: a d-regular graph with cached triangle-degree data.
//!
//! Invariant: `td`, `neqtd` and `value` always agree with `graph` — every
//! mutator refreshes them before the solution can be read again.

use crate::evaluate::{self, Evaluation};
use crate::graph::{Graph, Switch};

#[derive(Clone, Debug)]
pub struct Solution {
    d: usize,
    graph: Graph,
    td: Vec<usize>,
    neqtd: usize,
    value: f64,
}

/*───────────────────────── impl ─────────────────────────*/

impl Solution {
    /// Wrap a freshly generated d-regular graph and evaluate it.
    pub fn new(d: usize, graph: Graph) -> Self {
        let Evaluation { td, neqtd, value } = evaluate::evaluate(&graph);
        Self { d, graph, td, neqtd, value }
    }

    /* queries */

    #[inline] pub fn n(&self) -> usize                 { self.graph.n() }
    #[inline] pub fn d(&self) -> usize                 { self.d }
    #[inline] pub fn graph(&self) -> &Graph            { &self.graph }
    #[inline] pub fn triangle_degrees(&self) -> &[usize] { &self.td }
    #[inline] pub fn collisions(&self) -> usize        { self.neqtd }
    #[inline] pub fn value(&self) -> f64               { self.value }

    /// Every vertex has a distinct triangle-degree.
    #[inline]
    pub fn is_perfect(&self) -> bool {
        self.neqtd == 0
    }

    /* mutators */

    /// Commit a 2-switch to the live graph and refresh the derived fields.
    pub fn apply_switch(&mut self, sw: Switch) {
        self.graph.apply_switch(sw);
        self.refresh();
    }

    fn refresh(&mut self) {
        let Evaluation { td, neqtd, value } = evaluate::evaluate(&self.graph);
        self.td = td;
        self.neqtd = neqtd;
        self.value = value;
    }
}

/*───────────────────────── tests ─────────────────────────*/
