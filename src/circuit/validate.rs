//! Network validation.

use tracing::warn;

use crate::error::{NetworkError, Result};

use super::Network;

/// Validate a network before reduction.
///
/// Checks:
/// - The network has nodes and at least one edge
/// - Every resistance is finite
///
/// Zero and negative resistances pass through to the solver (they only
/// produce degenerate results) but are reported at `warn` level.
pub fn validate_network(network: &Network) -> Result<()> {
    if network.node_count() == 0 {
        return Err(NetworkError::InvalidNetwork {
            message: "Network has no nodes".to_string(),
        });
    }

    if network.edge_count() == 0 {
        return Err(NetworkError::InvalidNetwork {
            message: "Network has no resistors".to_string(),
        });
    }

    for edge in network.edges() {
        if !edge.resistance.is_finite() {
            return Err(NetworkError::InvalidResistance {
                from: edge.source.0,
                to: edge.target.0,
                value: edge.resistance,
            });
        }
        if edge.resistance <= 0.0 {
            warn!(%edge, "non-positive resistance");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_network() {
        let mut network = Network::new(2);
        network.connect(0, 1, 10.0).unwrap();
        assert!(validate_network(&network).is_ok());
    }

    #[test]
    fn test_empty_network_rejected() {
        assert!(matches!(
            validate_network(&Network::new(0)),
            Err(NetworkError::InvalidNetwork { .. })
        ));
        assert!(matches!(
            validate_network(&Network::new(4)),
            Err(NetworkError::InvalidNetwork { .. })
        ));
    }

    #[test]
    fn test_non_finite_resistance_rejected() {
        let mut network = Network::new(3);
        network.connect(0, 1, 1.0).unwrap();
        network.connect(1, 2, f64::INFINITY).unwrap();
        assert!(matches!(
            validate_network(&network),
            Err(NetworkError::InvalidResistance { from: 1, to: 2, .. })
        ));
    }

    #[test]
    fn test_zero_resistance_allowed() {
        let mut network = Network::new(2);
        network.connect(0, 1, 0.0).unwrap();
        assert!(validate_network(&network).is_ok());
    }
}
