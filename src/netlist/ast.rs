//! Abstract Syntax Tree types for netlists.

/// Complete AST representation of a parsed netlist.
#[derive(Debug, Clone, Default)]
pub struct NetlistAst {
    /// Node count from the `.nodes` directive, if given
    pub declared_nodes: Option<usize>,
    /// All resistors, in file order
    pub resistors: Vec<ResistorDef>,
}

impl NetlistAst {
    /// Create a new empty netlist AST.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes the network needs: the declared count, or the
    /// referenced count.
    pub fn node_count(&self) -> usize {
        self.declared_nodes.unwrap_or_else(|| self.referenced_nodes())
    }

    /// One past the highest node index any resistor references.
    pub fn referenced_nodes(&self) -> usize {
        self.resistors
            .iter()
            .map(|r| r.source.max(r.target).saturating_add(1))
            .max()
            .unwrap_or(0)
    }
}

/// A resistor definition: one directed edge of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorDef {
    /// Unique resistor name
    pub name: String,
    /// Node the edge leaves
    pub source: usize,
    /// Node the edge points to
    pub target: usize,
    /// Resistance in ohms
    pub resistance: f64,
    /// Source line number for error reporting
    pub line: usize,
}
