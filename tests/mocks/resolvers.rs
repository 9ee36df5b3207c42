//! Mock deposit-address resolvers
//!
//! Trait-level mocks with call tracking, so tests can assert not only on
//! results but on whether the relay was contacted at all.

#![allow(dead_code)]

use async_trait::async_trait;
use bridge_router::{Chain, DepositAddressResolver, RelayError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Resolver mock with a configurable answer and a call counter
pub struct MockResolver {
	deposit_address: Option<String>,
	calls: Arc<AtomicUsize>,
}

impl MockResolver {
	/// Resolver that always answers with `deposit_address`
	pub fn answering(deposit_address: &str) -> Self {
		Self {
			deposit_address: Some(deposit_address.to_string()),
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Resolver that always fails with a timeout
	pub fn failing() -> Self {
		Self {
			deposit_address: None,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// How many times the relay was contacted
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	/// Shared handle to the call counter, usable after the resolver has
	/// been moved into an engine
	pub fn call_counter(&self) -> Arc<AtomicUsize> {
		Arc::clone(&self.calls)
	}
}

#[async_trait]
impl DepositAddressResolver for MockResolver {
	async fn resolve_deposit_address(
		&self,
		_recipient: &str,
		_src: Chain,
		_dst: Chain,
		_denom: &str,
	) -> Result<String, RelayError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		match &self.deposit_address {
			Some(address) => Ok(address.clone()),
			None => Err(RelayError::Timeout { timeout_ms: 5_000 }),
		}
	}
}
