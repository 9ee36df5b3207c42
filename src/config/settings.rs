//! Configuration settings structures
//!
//! The registries are supplied as data, not code. `Settings` is the serde
//! shape of that data; `Settings::build` turns it into the validated,
//! immutable registry set, failing fast on any malformed entry.

use crate::models::{BridgeKind, Chain};
use crate::registry::{
	ChannelPair, ChannelTopology, Registries, RegistryError, Whitelist, WrappedAssetRegistry,
	WrappedAssetRoute,
};
use crate::relay::RelaySettings;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Top-level router configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
	/// Chains this configuration routes between
	pub chains: Vec<Chain>,
	/// Direct IBC channels: source chain -> destination chain -> channel id
	#[serde(default)]
	pub channels: HashMap<Chain, HashMap<Chain, String>>,
	/// Relay edges: source chain -> channel id toward the relay network
	#[serde(default)]
	pub relay_channels: HashMap<Chain, String>,
	/// Wrapped-asset routes: origin chain -> asset contract -> route
	#[serde(default)]
	pub wrapped_routes: HashMap<Chain, HashMap<String, WrappedRouteConfig>>,
	/// Asset whitelist: chain -> bridge -> cross-chain id -> local id
	#[serde(default)]
	pub whitelist: HashMap<Chain, HashMap<BridgeKind, HashMap<String, String>>>,
	/// Relay service connection settings
	pub relay: RelaySettings,
}

/// Configured route of one contract-native asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrappedRouteConfig {
	/// ICS-20 forwarding contract on the origin chain
	pub contract: String,
	pub channels: HashMap<Chain, ChannelPairConfig>,
}

/// Channel pair as configured. Both sides are optional in the file format
/// so that a half-filled entry is caught by validation instead of being
/// silently guessed around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPairConfig {
	pub origin: Option<String>,
	pub counterparty: Option<String>,
}

impl Settings {
	/// Build the validated registry set from this configuration.
	///
	/// Any violation is fatal: no engine is allowed to serve requests over
	/// a malformed registry.
	pub fn build(&self) -> Result<Registries, RegistryError> {
		let chains: HashSet<Chain> = self.chains.iter().copied().collect();

		let topology = ChannelTopology::new(
			self.channels.clone(),
			self.relay_channels.clone(),
			&chains,
		)?;

		let mut routes: HashMap<Chain, HashMap<String, WrappedAssetRoute>> = HashMap::new();
		for (origin, assets) in &self.wrapped_routes {
			let mut built = HashMap::new();
			for (asset, config) in assets {
				let mut pairs = HashMap::new();
				for (counterparty, pair) in &config.channels {
					let complete = match (&pair.origin, &pair.counterparty) {
						(Some(origin_channel), Some(counterparty_channel)) => ChannelPair {
							origin: origin_channel.clone(),
							counterparty: counterparty_channel.clone(),
						},
						_ => {
							return Err(RegistryError::PartialChannelPair {
								origin: *origin,
								asset: asset.clone(),
								counterparty: *counterparty,
							})
						},
					};
					pairs.insert(*counterparty, complete);
				}
				built.insert(
					asset.clone(),
					WrappedAssetRoute {
						contract: config.contract.clone(),
						channels: pairs,
					},
				);
			}
			routes.insert(*origin, built);
		}
		let wrapped = WrappedAssetRegistry::new(routes, &chains)?;

		let whitelist = Whitelist::new(self.whitelist.clone(), &wrapped, &chains)?;

		Ok(Registries {
			chains,
			topology,
			wrapped,
			whitelist,
		})
	}
}
