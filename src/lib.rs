//! # Resistor Network
//!
//! Equivalent resistance of directed resistor networks.
//!
//! This library provides:
//! - A weighted directed multigraph for describing resistor networks
//! - A reduction engine that collapses the graph with the series and
//!   parallel combination rules
//! - A small netlist format for describing networks in text files
//!
//! ## Architecture
//!
//! - [`circuit`] - Network graph representation and validation
//! - [`solver`] - Series/parallel rewrite rules and depth-first reduction
//! - [`netlist`] - Lexer and parser for the netlist format
//! - [`error`] - Error types
//!
//! ## Usage
//!
//! ```
//! use resistor_network::Network;
//!
//! let mut network = Network::new(3);
//! network.connect(0, 1, 2.0)?;
//! network.connect(1, 2, 3.0)?;
//! assert_eq!(network.total_resistance()?, 5.0);
//! # Ok::<(), resistor_network::NetworkError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! resnet ladder.net
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmNetwork } from 'resistor_network';
//!
//! const network = new WasmNetwork(3);
//! network.connect(0, 1, 2.0);
//! network.connect(1, 2, 3.0);
//! network.total_resistance(); // 5
//! ```
//!
//! ## Reduction Method
//!
//! Starting from node 0, the engine walks the graph depth-first. A node
//! with exactly one incoming and one outgoing edge is eliminated by adding
//! the two resistances; edges sharing source and target are combined by the
//! reciprocal-sum rule. This repeats until neither rule applies. The
//! network is solved if exactly one edge remains. Topologies that need
//! Kirchhoff's laws, such as a Wheatstone bridge, are reported as a
//! [`ReductionError`].

pub mod circuit;
pub mod error;
pub mod netlist;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Network, NodeId};
pub use error::{NetworkError, ReductionError, Result};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmNetwork;
