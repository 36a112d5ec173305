//! Core types for network representation.

use std::fmt;

/// A node of the network, an index into `[0, node_count)`.
/// Node 0 is always the source terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The source terminal (always index 0), where reduction starts.
    pub const SOURCE: NodeId = NodeId(0);

    /// Check if this is the source terminal.
    pub fn is_source(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_source() {
            write!(f, "SRC")
        } else {
            write!(f, "N{}", self.0)
        }
    }
}

/// An outgoing entry in a node's adjacency: the target and the resistance
/// of one directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Node the edge points to
    pub target: NodeId,
    /// Resistance in ohms
    pub resistance: f64,
}

impl Link {
    /// Create a new adjacency entry.
    pub fn new(target: NodeId, resistance: f64) -> Self {
        Self { target, resistance }
    }
}

/// A complete directed, resistance-weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Node the edge leaves
    pub source: NodeId,
    /// Node the edge points to
    pub target: NodeId,
    /// Resistance in ohms
    pub resistance: f64,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({} Ohm)", self.source, self.target, self.resistance)
    }
}
