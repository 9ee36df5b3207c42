//! Axelar relay client
//!
//! HTTP implementation of [`DepositAddressResolver`] against the Axelar
//! transfer API, plus the nexus transfer-fee query. One outbound call per
//! operation, bounded by the configured timeout, never retried here.

use crate::models::{Chain, Coin};
use crate::relay::{DepositAddressResolver, RelayError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Connection settings for the Axelar relay client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaySettings {
	/// Base URL of the relay API
	pub endpoint: String,
	/// Per-call timeout in milliseconds
	pub timeout_ms: u64,
}

/// Axelar's name for a chain. Terra is the only one whose name diverges
/// from ours (`terra-2` after the phoenix relaunch).
fn axelar_chain_name(chain: Chain) -> &'static str {
	match chain {
		Chain::Terra => "terra-2",
		Chain::Cosmos => "cosmoshub",
		Chain::Osmosis => "osmosis",
		Chain::Juno => "juno",
		Chain::Kujira => "kujira",
		Chain::Ethereum => "ethereum",
	}
}

#[derive(Debug, Serialize)]
struct DepositAddressRequest<'a> {
	source_chain: &'a str,
	destination_chain: &'a str,
	destination_address: &'a str,
	asset: &'a str,
}

#[derive(Debug, Deserialize)]
struct DepositAddressResponse {
	deposit_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransferFeeResponse {
	fee: Option<Coin>,
}

/// HTTP client for the Axelar relay
#[derive(Debug)]
pub struct AxelarResolver {
	client: Client,
	settings: RelaySettings,
}

impl AxelarResolver {
	pub fn new(settings: RelaySettings) -> Result<Self, RelayError> {
		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("bridge-router/0.1"));

		let client = Client::builder()
			.default_headers(headers)
			.build()
			.map_err(RelayError::Http)?;

		Ok(Self { client, settings })
	}

	/// Query the relay's transfer fee for an amount of `denom` moved from
	/// `src` to `dst`. Informational only; the routing engine never prices
	/// transfers itself.
	pub async fn transfer_fee(
		&self,
		src: Chain,
		dst: Chain,
		denom: &str,
		amount: u128,
	) -> Result<Coin, RelayError> {
		let url = format!(
			"{}/transfer_fee?source_chain={}&destination_chain={}&amount={}{}",
			self.settings.endpoint,
			axelar_chain_name(src),
			axelar_chain_name(dst),
			amount,
			denom,
		);

		let response = self.bounded(self.client.get(&url).send()).await??;
		if !response.status().is_success() {
			return Err(RelayError::Status {
				code: response.status().as_u16(),
				reason: response.status().to_string(),
			});
		}

		let body: TransferFeeResponse = self.bounded(response.json()).await??;
		body.fee
			.ok_or_else(|| RelayError::InvalidResponse("missing fee field".to_string()))
	}

	/// Run a relay call under the configured timeout
	async fn bounded<T>(
		&self,
		fut: impl std::future::Future<Output = Result<T, reqwest::Error>>,
	) -> Result<Result<T, reqwest::Error>, RelayError> {
		tokio::time::timeout(Duration::from_millis(self.settings.timeout_ms), fut)
			.await
			.map_err(|_| RelayError::Timeout {
				timeout_ms: self.settings.timeout_ms,
			})
	}
}

#[async_trait]
impl DepositAddressResolver for AxelarResolver {
	async fn resolve_deposit_address(
		&self,
		recipient: &str,
		src: Chain,
		dst: Chain,
		denom: &str,
	) -> Result<String, RelayError> {
		let request = DepositAddressRequest {
			source_chain: axelar_chain_name(src),
			destination_chain: axelar_chain_name(dst),
			destination_address: recipient,
			asset: denom,
		};

		debug!(
			"requesting deposit address from relay: {} -> {} ({})",
			src, dst, denom
		);

		let url = format!("{}/deposit-address", self.settings.endpoint);
		let response = self
			.bounded(self.client.post(&url).json(&request).send())
			.await??;

		let status = response.status();
		if status.as_u16() == 404 {
			return Err(RelayError::UnroutablePair { src, dst });
		}
		if !status.is_success() {
			return Err(RelayError::Status {
				code: status.as_u16(),
				reason: status.to_string(),
			});
		}

		let body: DepositAddressResponse = self.bounded(response.json()).await??;
		match body.deposit_address {
			Some(address) if !address.is_empty() => Ok(address),
			_ => Err(RelayError::InvalidResponse(
				"missing deposit_address field".to_string(),
			)),
		}
	}
}
