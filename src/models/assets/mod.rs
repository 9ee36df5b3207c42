//! Asset identity classification
//!
//! Decides which leg of the wrapped-asset flow a transfer takes, based on
//! the shape of the asset identifier.

use crate::models::Chain;

/// Prefix of IBC denom hashes, e.g. `ibc/3CB4...`
pub const IBC_DENOM_PREFIX: &str = "ibc/";

/// What kind of asset an identifier names, relative to one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
	/// An IBC voucher denom (`ibc/<hash>`), i.e. a wrapped representation
	WrappedCoin,
	/// A contract-native token, identified by its contract address
	ContractToken,
	/// A plain bank coin (`uluna`, `uatom`, ...)
	NativeCoin,
}

/// Classify an asset identifier against `chain`'s denom and address shapes.
///
/// Precedence: `ibc/` hash prefix, then the chain's contract-address format,
/// then native coin. The contract check is shape-based only: a bank denom
/// that happens to satisfy the chain's address format (prefix plus valid
/// checksum) would be misclassified as a contract token. No such denom is
/// known on the supported chains, but the ambiguity is inherent to
/// classifying by string shape.
pub fn classify(denom: &str, chain: Chain) -> AssetKind {
	if denom.starts_with(IBC_DENOM_PREFIX) {
		AssetKind::WrappedCoin
	} else if chain.is_contract_address(denom) {
		AssetKind::ContractToken
	} else {
		AssetKind::NativeCoin
	}
}
