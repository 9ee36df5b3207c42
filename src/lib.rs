//! Bridge Router Library
//!
//! A routing and instruction-composition engine for cross-chain transfers.
//! Given a source chain, destination chain, bridge kind, asset, amount, and
//! recipient, the engine validates the route against immutable registries
//! (channel topology, wrapped-asset routes, asset whitelist) and emits the
//! exact protocol message an external signer/broadcaster must submit, or a
//! typed rejection.
//!
//! The engine never signs, broadcasts, or verifies settlement; those live
//! behind the wallet and broadcaster layers consuming this crate.

pub mod config;
pub mod engine;
pub mod models;
pub mod registry;
pub mod relay;

// Core domain types
pub use models::{
	classify, AssetKind, BridgeKind, Chain, Coin, Cw20Send, Cw20SendBody, Ics20TransferMemo,
	MsgExecuteContract, MsgTransfer, RouteError, TransferInstruction, TransferRequest,
};

// Engine
pub use engine::RouteBuilder;

// Registries
pub use registry::{
	ChannelPair, ChannelTopology, Registries, RegistryError, Whitelist, WrappedAssetRegistry,
	WrappedAssetRoute,
};

// Relay
pub use relay::{AxelarResolver, DepositAddressResolver, RelayError, RelaySettings};

// Config
pub use config::{load_config, log_router_configuration, Settings, SettingsError};
