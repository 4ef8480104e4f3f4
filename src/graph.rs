//! Simple undirected graph stored as an adjacency BitVec per row,
//! plus the degree-preserving 2-switch move the whole search is built on.

use bitvec::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    /// Row-major adjacency; `adj[i][j]` is 1 ⇔ edge (i,j) exists, j≠i.
    adj: Vec<BitVec>,
}

impl Graph {
    /*────────── constructors ──────────*/

    /// Empty graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        let mut rows = Vec::with_capacity(n);
        for _ in 0..n {
            rows.push(bitvec![0; n]);
        }
        Self { adj: rows }
    }

    /// Build from explicit edge list (0-based indices, undirected).
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Complete graph on `n` vertices.
    pub fn complete(n: usize) -> Self {
        let mut g = Self::with_vertices(n);
        for u in 0..n {
            for v in u + 1..n {
                g.add_edge(u, v);
            }
        }
        g
    }

    /*────────── getters ──────────*/

    #[inline] pub fn n(&self) -> usize { self.adj.len() }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u][v]
    }

    /// Number of edges (each counted once).
    pub fn m(&self) -> usize {
        let mut m = 0usize;
        for i in 0..self.n() {
            m += self.neigh_row(i).iter_ones().filter(|&j| j > i).count();
        }
        m
    }

    /// Degree of vertex v.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].count_ones()
    }

    /// Immutable row slice for adjacency of v.
    #[inline]
    pub fn neigh_row(&self, v: usize) -> &BitSlice {
        &self.adj[v]
    }

    /// Every vertex has degree exactly `d`.
    pub fn is_regular(&self, d: usize) -> bool {
        (0..self.n()).all(|v| self.degree(v) == d)
    }

    /*────────── mutators ──────────*/

    #[inline]
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.n() && v < self.n() && u != v);
        self.adj[u].set(v, true);
        self.adj[v].set(u, true);
    }

    #[inline]
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.n() && v < self.n() && u != v);
        self.adj[u].set(v, false);
        self.adj[v].set(u, false);
    }

    /// Perform the switch: delete (u,s) and (v,t), add (v,s) and (u,t).
    /// Degrees are preserved (each of u,v,s,t loses one edge and gains one).
    pub fn apply_switch(&mut self, sw: Switch) {
        self.remove_edge(sw.u, sw.s);
        self.remove_edge(sw.v, sw.t);
        self.add_edge(sw.v, sw.s);
        self.add_edge(sw.u, sw.t);
    }

    /// Undo a switch previously applied with [`apply_switch`](Self::apply_switch).
    pub fn undo_switch(&mut self, sw: Switch) {
        self.remove_edge(sw.v, sw.s);
        self.remove_edge(sw.u, sw.t);
        self.add_edge(sw.u, sw.s);
        self.add_edge(sw.v, sw.t);
    }
}

/*────────────────── 2-switch move ──────────────────*/

/// A degree-preserving 2-edge-switch (u,v,s,t): legal only on graphs where
/// edges (u,s) and (v,t) exist while (v,s) and (u,t) do not, all four
/// vertices distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Switch {
    pub u: usize,
    pub v: usize,
    pub s: usize,
    pub t: usize,
}

impl Switch {
    pub fn new(u: usize, v: usize, s: usize, t: usize) -> Self {
        Self { u, v, s, t }
    }

    /// Legality check against a concrete graph.
    pub fn is_legal(&self, g: &Graph) -> bool {
        let Switch { u, v, s, t } = *self;
        u != v && s != u && s != v && t != u && t != v && t != s
            && g.has_edge(u, s) && !g.has_edge(v, s)
            && g.has_edge(v, t) && !g.has_edge(u, t)
    }

    /// The switch that reverses this one on the graph it produced:
    /// swapping the roles of s and t removes (u,t),(v,s) and restores
    /// (u,s),(v,t).
    pub fn inverse(&self) -> Switch {
        Switch { u: self.u, v: self.v, s: self.t, t: self.s }
    }
}

/*────────────────── tiny unit checks ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_triangle() {
        let g = Graph::from_edge_list(3, &[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(g.n(), 3);
        assert_eq!(g.m(), 3);
        assert!(g.is_regular(2));
    }

    #[test]
    fn switch_preserves_degrees() {
        // 6-cycle: 2-regular
        let g0 = Graph::from_edge_list(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);
        let sw = Switch::new(0, 3, 1, 4);
        assert!(sw.is_legal(&g0));

        let mut g = g0.clone();
        g.apply_switch(sw);
        assert!(g.is_regular(2));
        assert!(g.has_edge(3, 1) && g.has_edge(0, 4));
        assert!(!g.has_edge(0, 1) && !g.has_edge(3, 4));
    }

    #[test]
    fn switch_then_inverse_restores_graph() {
        let g0 = Graph::from_edge_list(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);
        let sw = Switch::new(0, 3, 1, 4);

        let mut g = g0.clone();
        g.apply_switch(sw);
        assert!(sw.inverse().is_legal(&g));
        g.apply_switch(sw.inverse());
        assert_eq!(g, g0);
    }

    #[test]
    fn undo_switch_restores_graph() {
        let g0 = Graph::from_edge_list(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);
        let sw = Switch::new(0, 3, 1, 4);

        let mut g = g0.clone();
        g.apply_switch(sw);
        g.undo_switch(sw);
        assert_eq!(g, g0);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        for u in 0..g.n() {
            assert!(!g.has_edge(u, u));
            for v in 0..g.n() {
                assert_eq!(g.has_edge(u, v), g.has_edge(v, u));
            }
        }
    }
}
