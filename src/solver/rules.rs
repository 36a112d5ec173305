//! Series and parallel rewrite rules.

use tracing::trace;

use crate::circuit::{Link, Network, NodeId};

/// Equivalent resistance of two resistors in series.
pub fn series(r1: f64, r2: f64) -> f64 {
    r1 + r2
}

/// Equivalent resistance of resistors in parallel: `1/R = sum(1/r_i)`.
///
/// A zero resistance shorts the whole group (result 0). An empty group has
/// infinite resistance.
pub fn parallel<I>(resistances: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let reciprocal_sum: f64 = resistances.into_iter().map(|r| 1.0 / r).sum();
    1.0 / reciprocal_sum
}

/// Eliminate the pass-through node `via` sitting on an edge out of `node`.
///
/// The edges `node -> via (r1)` and `via -> next (r2)` are replaced by a
/// single edge `node -> next (r1 + r2)`. Returns the new target, or `None`
/// (leaving the graph untouched) if `via` is not pass-through or `node` has
/// no edge to it.
pub(crate) fn merge_series(network: &mut Network, node: NodeId, via: NodeId) -> Option<NodeId> {
    if !network.is_pass_through(via) || !network.edges_from(node).iter().any(|l| l.target == via) {
        return None;
    }
    let incoming = network.remove_link(node, via)?;
    let outgoing = network.take_sole_link(via)?;
    let resistance = series(incoming.resistance, outgoing.resistance);

    trace!(
        %node,
        %via,
        next = %outgoing.target,
        resistance,
        "series merge"
    );

    network.insert_link(node, Link::new(outgoing.target, resistance));
    Some(outgoing.target)
}

/// Collapse every run of parallel edges out of `node` into one edge.
///
/// Returns the number of edges removed.
pub(crate) fn merge_parallel(network: &mut Network, node: NodeId) -> usize {
    let links = network.edges_from(node);
    if links.windows(2).all(|w| w[0].target != w[1].target) {
        return 0;
    }

    let mut merged = Vec::with_capacity(links.len());
    let mut start = 0;
    while start < links.len() {
        let target = links[start].target;
        let mut end = start + 1;
        while end < links.len() && links[end].target == target {
            end += 1;
        }

        if end - start == 1 {
            merged.push(links[start]);
        } else {
            let resistance = parallel(links[start..end].iter().map(|l| l.resistance));
            trace!(%node, %target, count = end - start, resistance, "parallel merge");
            merged.push(Link::new(target, resistance));
        }

        start = end;
    }

    let removed = links.len() - merged.len();
    network.replace_links(node, merged);
    removed
}
