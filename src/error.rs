//! Error taxonomy for the search engine.
//!
//! Only infeasible instances are hard errors. A shake deadlock is ordinary
//! control flow ([`ShakeOutcome::Deadlock`](crate::diversify::ShakeOutcome))
//! and an exhausted budget is a designed terminal state
//! ([`StopReason`](crate::vns::StopReason)), so neither appears here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No (n,d)-regular graph exists: handshake-lemma violation (n and d
    /// both odd) or degree too large (n ≤ d). Retrying cannot help, so the
    /// search aborts.
    #[error("no {d}-regular graph on {n} vertices exists")]
    InvalidInstance { n: usize, d: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_instance() {
        let e = Error::InvalidInstance { n: 5, d: 3 };
        assert_eq!(e.to_string(), "no 3-regular graph on 5 vertices exists");
    }
}
