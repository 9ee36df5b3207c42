//! Registry fixtures for testing
//!
//! A small mainnet-shaped topology: terra, cosmos, osmosis and juno, with
//! one wrapped asset (ampLUNA) routed terra <-> osmosis only.

#![allow(dead_code)]

use bridge_router::{
	BridgeKind, Chain, ChannelPair, ChannelTopology, Registries, Whitelist, WrappedAssetRegistry,
	WrappedAssetRoute,
};
use std::collections::{HashMap, HashSet};

pub const AMP_LUNA: &str = "terra1ecgazyd0waaj3g7l9cmy5gulhxkps2gmxu9ghducvuypjq68mq2s5lvsct";
pub const AMP_LUNA_ON_OSMOSIS: &str =
	"ibc/3CB43B244957F7CB0A8C0C7F81ADEA524A2AC57E48716B6F8F781286D96830D2";
pub const AMP_LUNA_ON_JUNO: &str =
	"ibc/EC324F1CEEA2587DC6D6A3D2ABDE04B37F2EDC3945553FF7B3F8D03FA5E5576D";
pub const ICS20_FORWARDER: &str = "terra1ics20hub";

pub const SENDER: &str = "terra1sender";
pub const RECIPIENT: &str = "cosmos1recipient";
pub const DEPOSIT_ADDRESS: &str = "axelar1deposit";

/// Builder for the shared test registry set
pub struct TestRegistries;

impl TestRegistries {
	pub fn chains() -> HashSet<Chain> {
		[Chain::Terra, Chain::Cosmos, Chain::Osmosis, Chain::Juno]
			.into_iter()
			.collect()
	}

	pub fn topology() -> ChannelTopology {
		let channels = HashMap::from([
			(
				Chain::Terra,
				HashMap::from([
					(Chain::Cosmos, "channel-0".to_string()),
					(Chain::Osmosis, "channel-1".to_string()),
				]),
			),
			(
				Chain::Cosmos,
				HashMap::from([
					(Chain::Terra, "channel-339".to_string()),
					(Chain::Osmosis, "channel-141".to_string()),
				]),
			),
			(
				Chain::Osmosis,
				HashMap::from([
					(Chain::Terra, "channel-251".to_string()),
					(Chain::Cosmos, "channel-0".to_string()),
				]),
			),
		]);
		// Juno deliberately has no relay edge
		let relay_channels = HashMap::from([
			(Chain::Terra, "channel-6".to_string()),
			(Chain::Cosmos, "channel-293".to_string()),
			(Chain::Osmosis, "channel-208".to_string()),
		]);
		ChannelTopology::new(channels, relay_channels, &Self::chains()).unwrap()
	}

	pub fn wrapped() -> WrappedAssetRegistry {
		let route = WrappedAssetRoute {
			contract: ICS20_FORWARDER.to_string(),
			channels: HashMap::from([(
				Chain::Osmosis,
				ChannelPair {
					origin: "channel-26".to_string(),
					counterparty: "channel-341".to_string(),
				},
			)]),
		};
		WrappedAssetRegistry::new(
			HashMap::from([(Chain::Terra, HashMap::from([(AMP_LUNA.to_string(), route)]))]),
			&Self::chains(),
		)
		.unwrap()
	}

	pub fn whitelist() -> Whitelist {
		let entries = HashMap::from([
			(
				Chain::Osmosis,
				HashMap::from([(
					BridgeKind::Ics20,
					HashMap::from([(AMP_LUNA.to_string(), AMP_LUNA_ON_OSMOSIS.to_string())]),
				)]),
			),
			(
				Chain::Juno,
				// Whitelisted on juno, but the wrapped route has no juno
				// channel pair: the return leg must be rejected
				HashMap::from([(
					BridgeKind::Ics20,
					HashMap::from([(AMP_LUNA.to_string(), AMP_LUNA_ON_JUNO.to_string())]),
				)]),
			),
		]);
		Whitelist::new(entries, &Self::wrapped(), &Self::chains()).unwrap()
	}

	pub fn registries() -> Registries {
		Registries {
			chains: Self::chains(),
			topology: Self::topology(),
			wrapped: Self::wrapped(),
			whitelist: Self::whitelist(),
		}
	}
}
