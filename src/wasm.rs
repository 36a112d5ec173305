//! WASM bindings for the resistor network reducer.
//!
//! This module exposes the network as a JavaScript object with the three
//! operations of the core API: construct, connect and total resistance.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmNetwork } from 'resistor_network';
//!
//! await init();
//!
//! const network = new WasmNetwork(2);
//! network.connect(0, 1, 2.0);
//! network.connect(0, 1, 2.0);
//!
//! try {
//!   console.log(network.total_resistance()); // 1
//! } catch (e) {
//!   console.error(e); // network not reducible by series/parallel rules
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::Network;
use crate::netlist;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible resistor network.
///
/// One instance owns one network. Reduction is destructive: after
/// `total_resistance` the network holds a single edge.
#[wasm_bindgen]
pub struct WasmNetwork {
    network: Network,
}

#[wasm_bindgen]
impl WasmNetwork {
    /// Create an empty network with `node_count` nodes.
    #[wasm_bindgen(constructor)]
    pub fn new(node_count: usize) -> WasmNetwork {
        WasmNetwork {
            network: Network::new(node_count),
        }
    }

    /// Create a network from netlist text.
    #[wasm_bindgen]
    pub fn from_netlist(source: &str) -> Result<WasmNetwork, JsValue> {
        let ast = netlist::parse(source).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let network = Network::from_ast(ast).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmNetwork { network })
    }

    /// Connect `source` to `target` with a resistor of `resistance` ohms.
    ///
    /// Throws if either node is out of range.
    #[wasm_bindgen]
    pub fn connect(
        &mut self,
        source: usize,
        target: usize,
        resistance: f64,
    ) -> Result<(), JsValue> {
        self.network
            .connect(source, target, resistance)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Reduce the network and return its equivalent resistance.
    ///
    /// Throws if the network is not reducible to a single edge.
    #[wasm_bindgen]
    pub fn total_resistance(&mut self) -> Result<f64, JsValue> {
        self.network
            .total_resistance()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of nodes in the network.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.network.node_count()
    }

    /// Number of edges currently in the network.
    #[wasm_bindgen(getter)]
    pub fn edge_count(&self) -> usize {
        self.network.edge_count()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
