//! Wrapped-asset route registry
//!
//! For each contract-native asset on its origin chain: the ICS-20
//! forwarding contract that mints/burns the wrapped representation, and the
//! channel pair used per counterparty chain. `origin` is the channel used
//! when the asset leaves its origin chain through the contract; the
//! `counterparty` channel moves the wrapped coin back as a plain IBC
//! transfer.

use crate::models::Chain;
use crate::registry::topology::is_valid_channel_id;
use crate::registry::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Directed channel pair between an origin chain and one counterparty
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelPair {
	/// Channel on the origin chain, used by the outbound contract-send leg
	pub origin: String,
	/// Channel on the counterparty chain, used by the wrapped-return leg
	pub counterparty: String,
}

/// Route of one contract-native asset out of its origin chain
#[derive(Debug, Clone)]
pub struct WrappedAssetRoute {
	/// ICS-20 forwarding contract on the origin chain
	pub contract: String,
	/// Channel pair per counterparty chain
	pub channels: HashMap<Chain, ChannelPair>,
}

/// Immutable registry of wrapped-asset routes, keyed by origin chain and
/// the asset's own contract address
#[derive(Debug, Clone)]
pub struct WrappedAssetRegistry {
	routes: HashMap<Chain, HashMap<String, WrappedAssetRoute>>,
}

impl WrappedAssetRegistry {
	/// Build and validate the registry.
	///
	/// Every asset key must be a contract address on its origin chain, no
	/// asset may be claimed by two origin chains, and every channel pair
	/// must be complete with well-formed channel ids. Partial pairs are a
	/// configuration error, never guessed around at runtime.
	pub fn new(
		routes: HashMap<Chain, HashMap<String, WrappedAssetRoute>>,
		supported: &HashSet<Chain>,
	) -> Result<Self, RegistryError> {
		let mut claimed: HashSet<&str> = HashSet::new();

		for (origin, assets) in &routes {
			if !supported.contains(origin) {
				return Err(RegistryError::UnknownChain(*origin));
			}
			for (asset, route) in assets {
				if !origin.is_contract_address(asset) {
					return Err(RegistryError::NotAContractAddress {
						origin: *origin,
						asset: asset.clone(),
					});
				}
				if !claimed.insert(asset) {
					return Err(RegistryError::DuplicateOriginAsset {
						asset: asset.clone(),
					});
				}
				if route.contract.is_empty() {
					return Err(RegistryError::MissingForwardingContract {
						origin: *origin,
						asset: asset.clone(),
					});
				}

				for (counterparty, pair) in &route.channels {
					if !supported.contains(counterparty) {
						return Err(RegistryError::UnknownChain(*counterparty));
					}
					if counterparty == origin {
						return Err(RegistryError::SelfChannel(*origin));
					}
					if !is_valid_channel_id(*origin, &pair.origin) {
						return Err(RegistryError::InvalidChannelId {
							chain: *origin,
							channel: pair.origin.clone(),
						});
					}
					if !is_valid_channel_id(*counterparty, &pair.counterparty) {
						return Err(RegistryError::InvalidChannelId {
							chain: *counterparty,
							channel: pair.counterparty.clone(),
						});
					}
				}
			}
		}

		Ok(Self { routes })
	}

	/// The route of `asset` out of `origin`, if registered
	pub fn route(&self, origin: Chain, asset: &str) -> Option<&WrappedAssetRoute> {
		self.routes.get(&origin)?.get(asset)
	}

	/// Forwarding contract and origin-side channel for the outbound leg
	pub fn origin_channel(
		&self,
		origin: Chain,
		asset: &str,
		counterparty: Chain,
	) -> Option<(&str, &str)> {
		let route = self.route(origin, asset)?;
		let pair = route.channels.get(&counterparty)?;
		Some((route.contract.as_str(), pair.origin.as_str()))
	}

	/// Counterparty-side channel for the wrapped-return leg
	pub fn counterparty_channel(
		&self,
		origin: Chain,
		asset: &str,
		counterparty: Chain,
	) -> Option<&str> {
		let route = self.route(origin, asset)?;
		let pair = route.channels.get(&counterparty)?;
		Some(pair.counterparty.as_str())
	}

	/// Whether any origin chain has registered `asset` as contract-native
	pub fn is_registered_asset(&self, asset: &str) -> bool {
		self.routes.values().any(|assets| assets.contains_key(asset))
	}
}
