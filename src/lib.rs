//! tdvns – Variable Neighborhood Search for d-regular graphs whose
//! vertices have pairwise distinct triangle-degrees.
//!
//! The engine builds a random regular graph, descends to a local optimum
//! of a spread objective over the triangle-degree sequence via
//! degree-preserving 2-edge-switches, and alternates randomized shaking
//! with descent until it finds a graph with zero colliding pairs or runs
//! out of budget.

/*───────── interne modules ─────────*/
pub mod diversify;
pub mod error;
pub mod evaluate;
pub mod generate;
pub mod graph;
pub mod neighbour;
pub mod params;
pub mod restart;
pub mod solution;
pub mod vns;

/*───────── re-exports ─────────*/
pub use error::Error;
pub use evaluate::Evaluation;
pub use graph::{Graph, Switch};
pub use params::Params;
pub use restart::solve_restarts;
pub use solution::Solution;
pub use vns::{solve, SearchOutcome, StopReason};
