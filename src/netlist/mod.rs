//! Netlist format for describing resistor networks.
//!
//! A netlist is line-oriented and human-editable. Each resistor is a
//! directed edge from its first node to its second; node 0 is the source
//! terminal.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { line }
//! line        = comment | directive | resistor | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = ".nodes" count
//! resistor    = name source target value
//!
//! name        = ('R' | 'r') { letter | digit | '_' }
//! source      = digit+
//! target      = digit+
//! value       = ['-'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+] [unit_suffix]
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! ```
//!
//! Without a `.nodes` directive the network gets one node past the highest
//! index referenced.
//!
//! # Example
//!
//! ```text
//! # Two 20 Ohm branches in parallel
//! .nodes 4
//! R1 0 1 10
//! R2 1 3 10
//! R3 0 2 10
//! R4 2 3 10
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Largest node count a netlist may declare or reference.
pub const MAX_NODES: usize = 1 << 24;

/// Parse a netlist string into an AST.
pub fn parse(input: &str) -> Result<NetlistAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<NetlistAst> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::NetworkError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Network;
    use crate::error::ReductionError;
    use approx::assert_relative_eq;

    #[test]
    fn test_ladder_demo() {
        let ast = parse(include_str!("../../demos/ladder.net")).unwrap();
        assert_eq!(ast.node_count(), 9);
        assert_eq!(ast.resistors.len(), 12);

        let mut network = Network::from_ast(ast).unwrap();
        assert_relative_eq!(network.total_resistance().unwrap(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bridge_demo() {
        let ast = parse(include_str!("../../demos/bridge.net")).unwrap();
        let mut network = Network::from_ast(ast).unwrap();
        assert_eq!(
            network.total_resistance(),
            Err(ReductionError { remaining_edges: 5 })
        );
    }
}
