//! Registry construction errors
//!
//! All of these are fatal at startup: an engine is never built over a
//! malformed registry.

use crate::models::{BridgeKind, Chain};
use thiserror::Error;

/// Validation failure while building a registry from configuration
#[derive(Error, Debug)]
pub enum RegistryError {
	#[error("chain {0} declares a channel to itself")]
	SelfChannel(Chain),

	#[error("invalid channel id {channel:?} on {chain}")]
	InvalidChannelId { chain: Chain, channel: String },

	#[error(
		"wrapped route for {asset} on {origin} has a partial channel pair for {counterparty}"
	)]
	PartialChannelPair {
		origin: Chain,
		asset: String,
		counterparty: Chain,
	},

	#[error("asset {asset} is claimed by more than one origin chain")]
	DuplicateOriginAsset { asset: String },

	#[error("wrapped route asset {asset} is not a contract address on {origin}")]
	NotAContractAddress { origin: Chain, asset: String },

	#[error("wrapped route for {asset} on {origin} has an empty forwarding contract")]
	MissingForwardingContract { origin: Chain, asset: String },

	#[error(
		"whitelist entry {hub_side} <-> {counterparty_side} for {chain}/{bridge} resolves to no known asset"
	)]
	UnresolvableWhitelistEntry {
		chain: Chain,
		bridge: BridgeKind,
		hub_side: String,
		counterparty_side: String,
	},

	#[error("chain {0} is referenced by a registry but not listed as supported")]
	UnknownChain(Chain),
}
