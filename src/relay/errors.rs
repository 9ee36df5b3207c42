//! Relay service error types

use crate::models::Chain;
use thiserror::Error;

/// Failure while talking to the third-party relay service
#[derive(Error, Debug)]
pub enum RelayError {
	#[error("relay request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("relay returned HTTP {code}: {reason}")]
	Status { code: u16, reason: String },

	#[error("relay did not answer within {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("invalid relay response: {0}")]
	InvalidResponse(String),

	#[error("relay does not route from {src} to {dst}")]
	UnroutablePair { src: Chain, dst: Chain },
}
