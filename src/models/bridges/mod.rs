//! Bridge protocol kinds
//!
//! The bridge kind selects which instruction composer runs in the routing
//! engine. `Wormhole` is reserved and always rejected with
//! `RouteError::BridgeNotImplemented`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bridge protocol selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeKind {
	/// Native IBC coin transfer over a direct channel
	Ibc,
	/// Wrapped-asset routing for contract-native tokens (ICS-20 style)
	Ics20,
	/// Third-party deposit-address relay
	Axelar,
	/// Reserved, not implemented
	Wormhole,
}

impl fmt::Display for BridgeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			BridgeKind::Ibc => "ibc",
			BridgeKind::Ics20 => "ics20",
			BridgeKind::Axelar => "axelar",
			BridgeKind::Wormhole => "wormhole",
		};
		write!(f, "{}", name)
	}
}
