//! Series/parallel reduction engine.
//!
//! The engine collapses a [`Network`](crate::circuit::Network) into a single
//! equivalent edge by applying two local rewrite rules until neither fires:
//!
//! ```text
//! series:    n --r1--> m --r2--> k     =>   n --(r1 + r2)--> k
//!            (m has one incoming and one outgoing edge)
//!
//! parallel:  n ==r1..rj==> k           =>   n --R--> k,  1/R = sum(1/r_i)
//! ```
//!
//! Every application removes one or more edges, so the edge count strictly
//! decreases and the reduction always reaches a fixed point. Networks that
//! need Kirchhoff's laws (bridges) stop with more than one edge and report
//! a [`ReductionError`](crate::error::ReductionError).

mod reduce;
mod rules;

pub use reduce::{reduce, ReductionStats};
pub use rules::{parallel, series};
