//! Depth-first series/parallel reduction.

use tracing::debug;

use super::rules::{merge_parallel, merge_series};
use crate::circuit::{Link, Network, NodeId};
use crate::error::ReductionError;

/// Counters describing one reduction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Pass-through nodes eliminated
    pub series_merges: usize,
    /// Edges removed by collapsing parallel runs
    pub parallel_merges: usize,
    /// Adjacency scans, including rescans after progress
    pub passes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    OnStack,
    Settled,
}

/// One node being scanned.
///
/// The scan walks a snapshot of the node's links taken when the pass
/// started, while merges rewrite the live adjacency.
struct Frame {
    node: NodeId,
    snapshot: Vec<Link>,
    cursor: usize,
    edges_at_start: usize,
}

impl Frame {
    fn new(network: &Network, node: NodeId) -> Self {
        Self {
            node,
            snapshot: network.edges_from(node).to_vec(),
            cursor: 0,
            edges_at_start: network.edge_count(),
        }
    }
}

/// Reduce `network` in place until neither rewrite rule applies.
///
/// Starting at the source node, each outgoing edge either eliminates a
/// pass-through target (series) or descends into the target first. Once a
/// node's links are scanned its parallel runs are collapsed, and the node is
/// scanned again if its processing removed any edge.
///
/// Nodes still on the stack are neither entered again nor eliminated, so
/// cycles terminate. A node whose scan made no progress is settled and is
/// not entered again: only its own frame rewrites its adjacency.
pub fn reduce(network: &mut Network) -> ReductionStats {
    let mut stats = ReductionStats::default();
    if network.node_count() == 0 {
        return stats;
    }

    let mut visit = vec![Visit::Unvisited; network.node_count()];
    visit[NodeId::SOURCE.0] = Visit::OnStack;
    let mut stack = vec![Frame::new(network, NodeId::SOURCE)];
    stats.passes += 1;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;

        if let Some(link) = frame.snapshot.get(frame.cursor).copied() {
            frame.cursor += 1;
            let next = link.target;

            if visit[next.0] != Visit::OnStack && network.is_pass_through(next) {
                if merge_series(network, node, next).is_some() {
                    stats.series_merges += 1;
                }
            } else if visit[next.0] == Visit::Unvisited {
                visit[next.0] = Visit::OnStack;
                stack.push(Frame::new(network, next));
                stats.passes += 1;
            }
            continue;
        }

        stats.parallel_merges += merge_parallel(network, node);

        if network.edge_count() < frame.edges_at_start {
            *frame = Frame::new(network, node);
            stats.passes += 1;
        } else {
            visit[node.0] = Visit::Settled;
            stack.pop();
        }
    }

    stats
}

impl Network {
    /// Collapse the network into a single equivalent edge and return its
    /// resistance.
    ///
    /// Reduction is destructive: on success exactly one edge remains. Fails
    /// with [`ReductionError`] when the fixed point leaves any other number
    /// of edges, e.g. for a bridge, or when the remaining edge does not leave
    /// the source node. Calling this again on a reduced network returns the
    /// same value.
    pub fn total_resistance(&mut self) -> Result<f64, ReductionError> {
        let edges_before = self.edge_count();
        let stats = reduce(self);
        let remaining_edges = self.edge_count();

        debug!(
            edges_before,
            remaining_edges,
            series_merges = stats.series_merges,
            parallel_merges = stats.parallel_merges,
            passes = stats.passes,
            "reduction finished"
        );

        match self.edges_from(NodeId::SOURCE) {
            [link] if remaining_edges == 1 => Ok(link.resistance),
            _ => Err(ReductionError { remaining_edges }),
        }
    }
}
