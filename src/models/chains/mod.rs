//! Supported blockchain definitions
//!
//! Chains are a closed set, defined at compile time. Each chain carries its
//! network id (used by signers) and its address prefix (used by the
//! asset-shape classifier).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
	Terra,
	Cosmos,
	Osmosis,
	Juno,
	Kujira,
	Ethereum,
}

impl Chain {
	/// Network/chain-id string, as expected by signing layers
	pub fn network_id(&self) -> &'static str {
		match self {
			Chain::Terra => "phoenix-1",
			Chain::Cosmos => "cosmoshub-4",
			Chain::Osmosis => "osmosis-1",
			Chain::Juno => "juno-1",
			Chain::Kujira => "kaiyo-1",
			Chain::Ethereum => "0x1",
		}
	}

	/// Account/contract address prefix for this chain
	pub fn address_prefix(&self) -> &'static str {
		match self {
			Chain::Terra => "terra1",
			Chain::Cosmos => "cosmos1",
			Chain::Osmosis => "osmo1",
			Chain::Juno => "juno1",
			Chain::Kujira => "kujira1",
			Chain::Ethereum => "0x",
		}
	}

	/// Whether the chain uses EVM-style hex addresses
	pub fn is_evm(&self) -> bool {
		matches!(self, Chain::Ethereum)
	}

	/// Check whether `candidate` satisfies this chain's address format.
	///
	/// Cosmos chains require the chain prefix plus a valid bech32 checksum;
	/// EVM chains require `0x` plus a 40-digit hex body. Note that account
	/// addresses and contract addresses share the same format, so a match
	/// does not prove the string names a contract.
	pub fn is_contract_address(&self, candidate: &str) -> bool {
		if !candidate.starts_with(self.address_prefix()) {
			return false;
		}

		if self.is_evm() {
			let body = &candidate[2..];
			body.len() == 40 && body.chars().all(|c| c.is_ascii_hexdigit())
		} else {
			bech32::decode(candidate).is_ok()
		}
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Chain::Terra => "terra",
			Chain::Cosmos => "cosmos",
			Chain::Osmosis => "osmosis",
			Chain::Juno => "juno",
			Chain::Kujira => "kujira",
			Chain::Ethereum => "ethereum",
		};
		write!(f, "{}", name)
	}
}
