//! Error types for the resistor network reducer.
//!
//! The reduction engine has exactly one failure mode, [`ReductionError`].
//! Everything around it (netlist parsing, bounds checks at the API boundary,
//! file access) reports through the unified [`NetworkError`].

use thiserror::Error;

/// Result type alias using [`NetworkError`].
pub type Result<T> = std::result::Result<T, NetworkError>;

/// The network could not be collapsed into a single equivalent edge.
///
/// Raised when series/parallel reduction reaches its fixed point with an edge
/// count other than one, or when the one remaining edge does not leave the
/// source node: a bridge topology, a cycle, or edges unreachable from the
/// source node. The graph has already been rewritten when this is
/// returned and cannot be solved again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "unable to calculate the total resistance of the circuit \
     ({remaining_edges} edges remain after reduction)"
)]
pub struct ReductionError {
    /// Edges left in the graph at the fixed point
    pub remaining_edges: usize,
}

/// Unified error type for all network operations.
#[derive(Error, Debug)]
pub enum NetworkError {
    // ============ Netlist Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Invalid resistor definition
    #[error("Invalid component '{name}' at line {line}: {message}")]
    InvalidComponent {
        name: String,
        line: usize,
        message: String,
    },

    /// Duplicate resistor name
    #[error("Duplicate component name '{name}'")]
    DuplicateComponent { name: String },

    // ============ Network Errors ============
    /// Node index outside `[0, node_count)`
    #[error("Node {node} is out of range for a network of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    /// Resistance that cannot take part in reduction
    #[error("Invalid resistance {value} on edge {from} -> {to}")]
    InvalidResistance {
        from: usize,
        to: usize,
        value: f64,
    },

    /// Network has nothing to reduce
    #[error("Invalid network: {message}")]
    InvalidNetwork { message: String },

    // ============ Solver Errors ============
    /// Series/parallel reduction did not converge to one edge
    #[error(transparent)]
    Reduction(#[from] ReductionError),

    // ============ I/O Errors ============
    /// Error reading netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NetworkError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(
        name: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidComponent {
            name: name.into(),
            line,
            message: message.into(),
        }
    }
}
