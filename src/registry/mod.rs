//! Immutable, load-once routing registries
//!
//! The three registries are validated at construction and never mutated
//! afterwards, so the engine can serve concurrent callers without locking.
//! Multiple independent registry sets (mainnet, testnet) may coexist.

pub mod errors;
pub mod topology;
pub mod whitelist;
pub mod wrapped;

pub use errors::RegistryError;
pub use topology::ChannelTopology;
pub use whitelist::Whitelist;
pub use wrapped::{ChannelPair, WrappedAssetRegistry, WrappedAssetRoute};

use crate::models::Chain;
use std::collections::HashSet;

/// The complete validated registry set one engine is built over
#[derive(Debug, Clone)]
pub struct Registries {
	/// Chains this configuration routes between
	pub chains: HashSet<Chain>,
	pub topology: ChannelTopology,
	pub wrapped: WrappedAssetRegistry,
	pub whitelist: Whitelist,
}
