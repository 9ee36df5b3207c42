//! Asset whitelist
//!
//! Per `(chain, bridge)`, the mapping between an asset's two identities:
//! how it is named on the hub side of the route and how it is named on the
//! counterparty side. Entries are written in config in hub-to-counterparty
//! order, but an asset's origin may be either side (a juno-native token has
//! its contract on the counterparty side), so lookups work in either
//! direction.

use crate::models::{BridgeKind, Chain, IBC_DENOM_PREFIX};
use crate::registry::{RegistryError, WrappedAssetRegistry};
use std::collections::{HashMap, HashSet};

/// Length of the hex hash in an `ibc/<hash>` denom
const IBC_HASH_LEN: usize = 64;

fn is_wrapped_coin_hash(denom: &str) -> bool {
	match denom.strip_prefix(IBC_DENOM_PREFIX) {
		Some(hash) => hash.len() == IBC_HASH_LEN && hash.bytes().all(|b| b.is_ascii_hexdigit()),
		None => false,
	}
}

/// A shape the whitelist accepts outside ICS-20 entries: a full wrapped
/// hash, a contract/account address, or a bank denom.
fn is_known_asset_shape(asset: &str) -> bool {
	if asset.starts_with(IBC_DENOM_PREFIX) {
		return is_wrapped_coin_hash(asset);
	}
	!asset.is_empty()
}

/// Immutable bidirectional asset mapping per `(chain, bridge)`
#[derive(Debug, Clone)]
pub struct Whitelist {
	entries: HashMap<(Chain, BridgeKind), HashMap<String, String>>,
}

impl Whitelist {
	/// Build and validate the whitelist.
	///
	/// ICS-20 entries must pair a contract asset registered in the wrapped
	/// registry with a full `ibc/<64-hex>` voucher hash, in either order.
	/// Other entries must have a recognizable asset shape on both sides.
	pub fn new(
		entries: HashMap<Chain, HashMap<BridgeKind, HashMap<String, String>>>,
		wrapped: &WrappedAssetRegistry,
		supported: &HashSet<Chain>,
	) -> Result<Self, RegistryError> {
		let mut flat = HashMap::new();

		for (chain, bridges) in entries {
			if !supported.contains(&chain) {
				return Err(RegistryError::UnknownChain(chain));
			}
			for (bridge, assets) in bridges {
				for (hub_side, counterparty_side) in &assets {
					let valid = match bridge {
						BridgeKind::Ics20 => {
							let pairs_up = |contract: &str, voucher: &str| {
								wrapped.is_registered_asset(contract)
									&& is_wrapped_coin_hash(voucher)
							};
							pairs_up(hub_side, counterparty_side)
								|| pairs_up(counterparty_side, hub_side)
						},
						_ => {
							is_known_asset_shape(hub_side)
								&& is_known_asset_shape(counterparty_side)
						},
					};
					if !valid {
						return Err(RegistryError::UnresolvableWhitelistEntry {
							chain,
							bridge,
							hub_side: hub_side.clone(),
							counterparty_side: counterparty_side.clone(),
						});
					}
				}
				flat.insert((chain, bridge), assets);
			}
		}

		Ok(Self { entries: flat })
	}

	/// The other identity of `asset` under `(chain, bridge)`, looked up in
	/// either direction
	pub fn counterpart_of(&self, chain: Chain, bridge: BridgeKind, asset: &str) -> Option<&str> {
		let assets = self.entries.get(&(chain, bridge))?;
		if let Some(counterparty_side) = assets.get(asset) {
			return Some(counterparty_side.as_str());
		}
		assets
			.iter()
			.find(|(_, value)| value.as_str() == asset)
			.map(|(key, _)| key.as_str())
	}
}
