//! Transfer request types

use crate::models::{BridgeKind, Chain, RouteError};
use serde::{Deserialize, Serialize};

/// An amount of one asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coin {
	/// Asset identifier: bank denom, `ibc/<hash>`, or contract address
	pub denom: String,
	/// Integer amount in the asset's base unit, as a string
	pub amount: String,
}

impl Coin {
	pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
		Self {
			denom: denom.into(),
			amount: amount.into(),
		}
	}

	/// Parse the amount, rejecting anything that is not a positive integer.
	///
	/// Fractional or otherwise malformed amounts are a caller error and are
	/// never silently rounded.
	pub fn validated_amount(&self) -> Result<u128, RouteError> {
		let raw = self.amount.trim();
		if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
			return Err(RouteError::InvalidAmount(self.amount.clone()));
		}

		let value: u128 = raw
			.parse()
			.map_err(|_| RouteError::InvalidAmount(self.amount.clone()))?;
		if value == 0 {
			return Err(RouteError::InvalidAmount(self.amount.clone()));
		}

		Ok(value)
	}
}

/// A single cross-chain transfer attempt, constructed by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferRequest {
	pub src: Chain,
	pub dst: Chain,
	pub bridge: BridgeKind,
	/// Signer address on the source chain, supplied by the wallet layer
	pub sender: String,
	/// Recipient address on the destination chain
	pub recipient: String,
	pub coin: Coin,
}
