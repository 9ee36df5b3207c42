//! Chain & channel topology
//!
//! A sparse directed graph of IBC channels plus per-chain relay edges.
//! Absence of an edge means the pair is unroutable by that bridge. The
//! graph is deliberately not symmetric: each chain numbers its own end of
//! a connection.

use crate::models::Chain;
use crate::registry::RegistryError;
use std::collections::{HashMap, HashSet};

/// Check a channel id against the source chain's channel-id format.
///
/// Cosmos chains use `channel-<digits>`; EVM chains carry no IBC channels
/// of their own, so any non-empty id is accepted there.
pub(crate) fn is_valid_channel_id(chain: Chain, channel: &str) -> bool {
	if channel.is_empty() {
		return false;
	}
	if chain.is_evm() {
		return true;
	}

	match channel.strip_prefix("channel-") {
		Some(suffix) => !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()),
		None => false,
	}
}

/// Immutable registry of direct IBC channels and relay edges
#[derive(Debug, Clone)]
pub struct ChannelTopology {
	channels: HashMap<(Chain, Chain), String>,
	relay_channels: HashMap<Chain, String>,
}

impl ChannelTopology {
	/// Build and validate the topology.
	///
	/// Rejects self-edges, malformed channel ids, and edges touching chains
	/// outside the supported set.
	pub fn new(
		channels: HashMap<Chain, HashMap<Chain, String>>,
		relay_channels: HashMap<Chain, String>,
		supported: &HashSet<Chain>,
	) -> Result<Self, RegistryError> {
		let mut edges = HashMap::new();
		for (src, destinations) in channels {
			if !supported.contains(&src) {
				return Err(RegistryError::UnknownChain(src));
			}
			for (dst, channel) in destinations {
				if src == dst {
					return Err(RegistryError::SelfChannel(src));
				}
				if !supported.contains(&dst) {
					return Err(RegistryError::UnknownChain(dst));
				}
				if !is_valid_channel_id(src, &channel) {
					return Err(RegistryError::InvalidChannelId { chain: src, channel });
				}
				edges.insert((src, dst), channel);
			}
		}

		for (chain, channel) in &relay_channels {
			if !supported.contains(chain) {
				return Err(RegistryError::UnknownChain(*chain));
			}
			if !is_valid_channel_id(*chain, channel) {
				return Err(RegistryError::InvalidChannelId {
					chain: *chain,
					channel: channel.clone(),
				});
			}
		}

		Ok(Self {
			channels: edges,
			relay_channels,
		})
	}

	/// Direct IBC channel from `src` to `dst`, if one is registered
	pub fn channel(&self, src: Chain, dst: Chain) -> Option<&str> {
		self.channels.get(&(src, dst)).map(String::as_str)
	}

	/// Relay channel leaving `src`, used only by third-party relay traffic
	pub fn relay_channel(&self, src: Chain) -> Option<&str> {
		self.relay_channels.get(&src).map(String::as_str)
	}
}
