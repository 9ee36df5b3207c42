//! Relay deposit-address resolution
//!
//! The one asynchronous, fallible collaborator of the routing engine: a
//! third-party relay service that issues one-time deposit addresses.
//! The engine depends on the trait only; tests inject mocks.

pub mod axelar;
pub mod errors;

pub use axelar::{AxelarResolver, RelaySettings};
pub use errors::RelayError;

use crate::models::Chain;
use async_trait::async_trait;

/// Resolves a one-time deposit address from a third-party relay.
///
/// Implementations must not retry internally: whether a deposit-address
/// request is safe to repeat depends on the relay's own semantics, which
/// the engine does not assume. Retry policy belongs to the caller.
#[async_trait]
pub trait DepositAddressResolver: Send + Sync {
	async fn resolve_deposit_address(
		&self,
		recipient: &str,
		src: Chain,
		dst: Chain,
		denom: &str,
	) -> Result<String, RelayError>;
}
