//! Weighted directed multigraph holding the resistor network.

use tracing::trace;

use super::types::{Edge, Link, NodeId};
use crate::error::{NetworkError, Result};
use crate::netlist::{NetlistAst, MAX_NODES};

/// A resistor network as a directed multigraph.
///
/// Each node owns its outgoing edges as a list of [`Link`]s kept ordered by
/// target, so parallel edges (same source and target) are always contiguous.
/// The indegree table and the edge count are maintained on every insertion
/// and removal:
///
/// - `indegree[n]` equals the number of links targeting `n`
/// - `edge_count` equals the total length of all adjacency lists
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Outgoing links per node, ordered by target
    adjacency: Vec<Vec<Link>>,

    /// Number of links targeting each node
    indegree: Vec<usize>,

    /// Total number of edges
    edge_count: usize,
}

impl Network {
    /// Create an empty network with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            indegree: vec![0; node_count],
            edge_count: 0,
        }
    }

    /// Build a network from a parsed netlist.
    ///
    /// The node count is taken from the `.nodes` directive when present,
    /// otherwise from the highest node index referenced.
    pub fn from_ast(ast: NetlistAst) -> Result<Self> {
        let node_count = ast.node_count();
        if node_count > MAX_NODES {
            return Err(NetworkError::InvalidNetwork {
                message: format!("{} nodes exceed the limit of {}", node_count, MAX_NODES),
            });
        }
        let mut network = Network::new(node_count);
        for resistor in &ast.resistors {
            network.connect(resistor.source, resistor.target, resistor.resistance)?;
        }
        Ok(network)
    }

    /// Connect `source` to `target` with a resistor of `resistance` ohms.
    ///
    /// Parallel edges are allowed and the resistance is not checked.
    /// Fails with [`NetworkError::NodeOutOfRange`] if either endpoint is not a
    /// node of this network, in which case nothing is inserted.
    pub fn connect(&mut self, source: usize, target: usize, resistance: f64) -> Result<()> {
        let source = self.check_node(source)?;
        let target = self.check_node(target)?;
        trace!(%source, %target, resistance, "connect");
        self.insert_link(source, Link::new(target, resistance));
        Ok(())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges currently in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges currently targeting `node`, or `None` if the node
    /// does not exist.
    pub fn indegree(&self, node: NodeId) -> Option<usize> {
        self.indegree.get(node.0).copied()
    }

    /// Outgoing links of `node`, ordered by target. Empty for unknown nodes.
    pub fn edges_from(&self, node: NodeId) -> &[Link] {
        self.adjacency.get(node.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every edge in the graph.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(source, links)| {
            links.iter().map(move |link| Edge {
                source: NodeId(source),
                target: link.target,
                resistance: link.resistance,
            })
        })
    }

    fn check_node(&self, node: usize) -> Result<NodeId> {
        if node < self.node_count() {
            Ok(NodeId(node))
        } else {
            Err(NetworkError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    // ============ Rewrite primitives (solver only) ============

    /// A node is pass-through when it has exactly one outgoing and exactly
    /// one incoming edge.
    pub(crate) fn is_pass_through(&self, node: NodeId) -> bool {
        self.adjacency[node.0].len() == 1 && self.indegree[node.0] == 1
    }

    /// Insert a link, keeping the adjacency ordered by target.
    /// A new link goes after existing links to the same target.
    pub(crate) fn insert_link(&mut self, source: NodeId, link: Link) {
        let links = &mut self.adjacency[source.0];
        let pos = links.partition_point(|l| l.target <= link.target);
        links.insert(pos, link);
        self.indegree[link.target.0] += 1;
        self.edge_count += 1;
    }

    /// Remove one link from `source` to `target`.
    pub(crate) fn remove_link(&mut self, source: NodeId, target: NodeId) -> Option<Link> {
        let links = &mut self.adjacency[source.0];
        let pos = links.iter().position(|l| l.target == target)?;
        let link = links.remove(pos);
        self.indegree[target.0] -= 1;
        self.edge_count -= 1;
        Some(link)
    }

    /// Remove and return the only outgoing link of `node`, leaving its
    /// adjacency empty. Returns `None` unless the node has exactly one link.
    pub(crate) fn take_sole_link(&mut self, node: NodeId) -> Option<Link> {
        let links = &mut self.adjacency[node.0];
        if links.len() != 1 {
            return None;
        }
        let link = links.pop()?;
        self.indegree[link.target.0] -= 1;
        self.edge_count -= 1;
        Some(link)
    }

    /// Replace the whole adjacency of `node`. `links` must be ordered by
    /// target.
    pub(crate) fn replace_links(&mut self, node: NodeId, links: Vec<Link>) {
        debug_assert!(links.windows(2).all(|w| w[0].target <= w[1].target));
        let old = std::mem::replace(&mut self.adjacency[node.0], links);
        for link in &old {
            self.indegree[link.target.0] -= 1;
        }
        for link in &self.adjacency[node.0] {
            self.indegree[link.target.0] += 1;
        }
        self.edge_count = self.edge_count - old.len() + self.adjacency[node.0].len();
    }

    /// Check that the indegree table and edge count agree with the
    /// adjacency lists.
    #[cfg(test)]
    pub(crate) fn counters_consistent(&self) -> bool {
        let mut indegree = vec![0; self.node_count()];
        for link in self.adjacency.iter().flatten() {
            indegree[link.target.0] += 1;
        }
        let edge_count: usize = self.adjacency.iter().map(Vec::len).sum();
        indegree == self.indegree && edge_count == self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::ResistorDef;

    #[test]
    fn test_new_network_is_empty() {
        let network = Network::new(3);
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edge_count(), 0);
        assert_eq!(network.indegree(NodeId(2)), Some(0));
        assert_eq!(network.indegree(NodeId(3)), None);
    }

    #[test]
    fn test_connect_updates_counters() {
        let mut network = Network::new(3);
        network.connect(0, 1, 2.0).unwrap();
        network.connect(0, 1, 4.0).unwrap();
        network.connect(1, 2, 3.0).unwrap();

        assert_eq!(network.edge_count(), 3);
        assert_eq!(network.indegree(NodeId(1)), Some(2));
        assert_eq!(network.indegree(NodeId(2)), Some(1));
        assert_eq!(network.indegree(NodeId(0)), Some(0));
        assert!(network.counters_consistent());
    }

    #[test]
    fn test_adjacency_ordered_by_target() {
        let mut network = Network::new(4);
        network.connect(0, 3, 1.0).unwrap();
        network.connect(0, 1, 2.0).unwrap();
        network.connect(0, 3, 3.0).unwrap();
        network.connect(0, 2, 4.0).unwrap();
        network.connect(0, 1, 5.0).unwrap();

        let targets: Vec<usize> = network
            .edges_from(NodeId(0))
            .iter()
            .map(|l| l.target.0)
            .collect();
        assert_eq!(targets, vec![1, 1, 2, 3, 3]);

        // Parallel links keep insertion order among themselves
        let first = network.edges_from(NodeId(0))[0];
        assert_eq!(first.resistance, 2.0);
    }

    #[test]
    fn test_connect_out_of_range() {
        let mut network = Network::new(2);
        let err = network.connect(0, 2, 1.0).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::NodeOutOfRange {
                node: 2,
                node_count: 2
            }
        ));
        assert_eq!(network.edge_count(), 0);
        assert!(network.counters_consistent());
    }

    #[test]
    fn test_connect_on_empty_network() {
        let mut network = Network::new(0);
        assert!(network.connect(0, 0, 1.0).is_err());
    }

    #[test]
    fn test_non_positive_resistance_is_accepted() {
        let mut network = Network::new(2);
        network.connect(0, 1, 0.0).unwrap();
        network.connect(0, 1, -5.0).unwrap();
        assert_eq!(network.edge_count(), 2);
    }

    #[test]
    fn test_edges_iterator() {
        let mut network = Network::new(3);
        network.connect(1, 2, 3.0).unwrap();
        network.connect(0, 1, 2.0).unwrap();

        let edges: Vec<Edge> = network.edges().collect();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source, NodeId(0));
        assert_eq!(edges[0].target, NodeId(1));
        assert_eq!(edges[1].source, NodeId(1));
        assert_eq!(edges[1].resistance, 3.0);
    }

    #[test]
    fn test_from_ast() {
        let ast = crate::netlist::parse("R1 0 1 2\nR2 1 2 3\nR3 1 2 3").unwrap();
        let network = Network::from_ast(ast).unwrap();
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edge_count(), 3);
        assert_eq!(network.indegree(NodeId(2)), Some(2));
    }

    #[test]
    fn test_from_ast_node_outside_declared_count() {
        let resistor = |name: &str, source, target| ResistorDef {
            name: name.to_string(),
            source,
            target,
            resistance: 1.0,
            line: 1,
        };
        let ast = NetlistAst {
            declared_nodes: Some(2),
            resistors: vec![resistor("R1", 0, 1), resistor("R2", 1, 5)],
        };
        let err = Network::from_ast(ast).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::NodeOutOfRange {
                node: 5,
                node_count: 2
            }
        ));
    }

    #[test]
    fn test_from_ast_rejects_oversized_node_count() {
        let ast = NetlistAst {
            declared_nodes: Some(usize::MAX),
            resistors: Vec::new(),
        };
        let err = Network::from_ast(ast).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidNetwork { .. }));
    }

    #[test]
    fn test_rewrite_primitives_keep_counters() {
        let mut network = Network::new(3);
        network.connect(0, 1, 2.0).unwrap();
        network.connect(1, 2, 3.0).unwrap();
        assert!(network.is_pass_through(NodeId(1)));
        assert!(!network.is_pass_through(NodeId(0)));

        let sole = network.take_sole_link(NodeId(1)).unwrap();
        assert_eq!(sole.target, NodeId(2));
        assert!(network.counters_consistent());

        let removed = network.remove_link(NodeId(0), NodeId(1)).unwrap();
        assert_eq!(removed.resistance, 2.0);
        assert!(network.remove_link(NodeId(0), NodeId(1)).is_none());

        network.insert_link(NodeId(0), Link::new(NodeId(2), 5.0));
        assert_eq!(network.edge_count(), 1);
        assert!(network.counters_consistent());

        network.replace_links(
            NodeId(0),
            vec![Link::new(NodeId(1), 1.0), Link::new(NodeId(2), 1.0)],
        );
        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.indegree(NodeId(1)), Some(1));
        assert!(network.counters_consistent());
    }
}
