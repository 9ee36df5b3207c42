//! Route building
//!
//! The orchestrator: validates a transfer request against the registries,
//! dispatches to the bridge-specific composer, and returns a complete
//! protocol instruction or a typed rejection. Holds only immutable state
//! plus the resolver handle, so concurrent calls need no locking. The
//! relay lookup is the single side effect and the last fallible step, so
//! cancellation is safe at any await point.

use crate::models::{
	classify, AssetKind, BridgeKind, Cw20Send, Ics20TransferMemo, MsgExecuteContract, MsgTransfer,
	RouteError, TransferInstruction, TransferRequest,
};
use crate::registry::Registries;
use crate::relay::DepositAddressResolver;
use std::sync::Arc;
use tracing::{debug, warn};

/// Bridge routing engine
pub struct RouteBuilder {
	registries: Registries,
	resolver: Arc<dyn DepositAddressResolver>,
}

impl RouteBuilder {
	/// Build an engine over validated registries and a relay resolver
	pub fn new(registries: Registries, resolver: Arc<dyn DepositAddressResolver>) -> Self {
		Self {
			registries,
			resolver,
		}
	}

	/// Turn a transfer request into a protocol instruction.
	///
	/// Preconditions run in a fixed order regardless of bridge kind:
	/// distinct chains, both chains supported, positive integer amount.
	/// No instruction is returned unless every referenced channel,
	/// contract, and address resolved positively.
	pub async fn build_instruction(
		&self,
		request: &TransferRequest,
	) -> Result<TransferInstruction, RouteError> {
		if request.src == request.dst {
			return Err(RouteError::SameChainTransfer);
		}
		for chain in [request.src, request.dst] {
			if !self.registries.chains.contains(&chain) {
				return Err(RouteError::UnsupportedChain(chain));
			}
		}
		request.coin.validated_amount()?;

		debug!(
			"routing {} {} from {} to {} via {}",
			request.coin.amount, request.coin.denom, request.src, request.dst, request.bridge
		);

		match request.bridge {
			BridgeKind::Ibc => self.build_ibc(request),
			BridgeKind::Ics20 => self.build_ics20(request),
			BridgeKind::Axelar => self.build_relay(request).await,
			BridgeKind::Wormhole => Err(RouteError::BridgeNotImplemented(request.bridge)),
		}
	}

	/// Native IBC transfer over the direct channel
	fn build_ibc(&self, request: &TransferRequest) -> Result<TransferInstruction, RouteError> {
		let channel = self
			.registries
			.topology
			.channel(request.src, request.dst)
			.ok_or(RouteError::MissingChannel {
				src: request.src,
				dst: request.dst,
			})?;

		Ok(TransferInstruction::IbcTransfer(MsgTransfer::new(
			channel,
			request.coin.clone(),
			&request.sender,
			&request.recipient,
		)))
	}

	/// Wrapped-asset routing: the asset's shape decides which leg runs
	fn build_ics20(&self, request: &TransferRequest) -> Result<TransferInstruction, RouteError> {
		match classify(&request.coin.denom, request.src) {
			AssetKind::WrappedCoin => self.build_wrapped_return(request),
			AssetKind::ContractToken => self.build_contract_send(request),
			AssetKind::NativeCoin => Err(RouteError::UnsupportedAsset {
				denom: request.coin.denom.clone(),
				bridge: request.bridge,
			}),
		}
	}

	/// Return leg: the wrapped coin travels back to its origin chain as a
	/// plain IBC transfer over the counterparty channel.
	fn build_wrapped_return(
		&self,
		request: &TransferRequest,
	) -> Result<TransferInstruction, RouteError> {
		let canonical = self
			.registries
			.whitelist
			.counterpart_of(request.src, BridgeKind::Ics20, &request.coin.denom)
			.ok_or_else(|| RouteError::MissingWrappedRoute {
				// The miss is in the source chain's whitelist table
				chain: request.src,
				asset: request.coin.denom.clone(),
			})?;

		let channel = self
			.registries
			.wrapped
			.counterparty_channel(request.dst, canonical, request.src)
			.ok_or_else(|| RouteError::MissingWrappedRoute {
				// The miss is in the origin chain's route registry
				chain: request.dst,
				asset: canonical.to_string(),
			})?;

		Ok(TransferInstruction::IbcTransfer(MsgTransfer::new(
			channel,
			request.coin.clone(),
			&request.sender,
			&request.recipient,
		)))
	}

	/// Outbound leg: execute the token contract's `send` toward the
	/// forwarding contract, with the IBC hop described in the memo.
	fn build_contract_send(
		&self,
		request: &TransferRequest,
	) -> Result<TransferInstruction, RouteError> {
		let (forwarding_contract, channel) = self
			.registries
			.wrapped
			.origin_channel(request.src, &request.coin.denom, request.dst)
			.ok_or_else(|| RouteError::MissingWrappedRoute {
				chain: request.src,
				asset: request.coin.denom.clone(),
			})?;

		let memo = Ics20TransferMemo::new(channel, &request.recipient);
		Ok(TransferInstruction::ContractSend(MsgExecuteContract {
			sender: request.sender.clone(),
			contract: request.coin.denom.clone(),
			msg: Cw20Send::new(forwarding_contract, request.coin.amount.clone(), &memo),
		}))
	}

	/// Relay route: resolve the one-time deposit address, then compose an
	/// IBC transfer to it over the relay channel. The relay edge is checked
	/// before any network call is made.
	async fn build_relay(
		&self,
		request: &TransferRequest,
	) -> Result<TransferInstruction, RouteError> {
		let channel = self
			.registries
			.topology
			.relay_channel(request.src)
			.ok_or(RouteError::MissingRelayChannel(request.src))?;

		let deposit_address = self
			.resolver
			.resolve_deposit_address(
				&request.recipient,
				request.src,
				request.dst,
				&request.coin.denom,
			)
			.await
			.map_err(|e| {
				warn!("relay deposit-address resolution failed: {}", e);
				e
			})?;

		let transfer = MsgTransfer::new(
			channel,
			request.coin.clone(),
			&request.sender,
			&deposit_address,
		);
		Ok(TransferInstruction::RelayedTransfer {
			deposit_address,
			transfer,
		})
	}
}
