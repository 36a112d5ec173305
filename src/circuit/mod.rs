//! Network graph representation and validation.
//!
//! This module provides the weighted multigraph the solver reduces. The
//! [`Network`] struct owns per-node adjacency, the indegree table and the
//! running edge count.

mod graph;
mod types;
mod validate;

pub use graph::Network;
pub use types::*;
pub use validate::validate_network;
