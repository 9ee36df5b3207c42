//! Routing error types

use crate::models::{BridgeKind, Chain};
use crate::relay::RelayError;
use thiserror::Error;

/// Why a transfer request could not be turned into an instruction.
///
/// All variants are recoverable: the caller may pick a different bridge or
/// abort. Exactly one variant is returned per failed call, with the first
/// failing precondition winning.
#[derive(Error, Debug)]
pub enum RouteError {
	#[error("source chain and destination chain must be different")]
	SameChainTransfer,

	#[error("chain {0} is not supported by this router")]
	UnsupportedChain(Chain),

	#[error("invalid transfer amount: {0:?}")]
	InvalidAmount(String),

	#[error("asset {denom} is not supported by the {bridge} bridge")]
	UnsupportedAsset { denom: String, bridge: BridgeKind },

	#[error("no IBC channel registered from {src} to {dst}")]
	MissingChannel { src: Chain, dst: Chain },

	#[error("no wrapped-asset route resolved on {chain} for {asset}")]
	MissingWrappedRoute { chain: Chain, asset: String },

	#[error("chain {0} has no relay channel")]
	MissingRelayChannel(Chain),

	#[error("deposit address unavailable: {0}")]
	DepositAddressUnavailable(#[from] RelayError),

	#[error("the {0} bridge is not implemented")]
	BridgeNotImplemented(BridgeKind),
}
