//! End-to-end tests for the routing engine
//!
//! Each test drives `RouteBuilder::build_instruction` over the shared
//! fixture registries with a mock relay resolver.

mod mocks;

use bridge_router::{
	BridgeKind, Chain, Coin, RouteBuilder, RouteError, TransferInstruction, TransferRequest,
};
use chrono::Utc;
use mocks::configs::{
	AMP_LUNA, AMP_LUNA_ON_JUNO, AMP_LUNA_ON_OSMOSIS, DEPOSIT_ADDRESS, ICS20_FORWARDER, RECIPIENT,
	SENDER,
};
use mocks::{MockResolver, TestRegistries};
use std::sync::Arc;

fn engine_with(resolver: MockResolver) -> RouteBuilder {
	mocks::init_tracing();
	RouteBuilder::new(TestRegistries::registries(), Arc::new(resolver))
}

fn engine() -> RouteBuilder {
	engine_with(MockResolver::answering(DEPOSIT_ADDRESS))
}

fn request(src: Chain, dst: Chain, bridge: BridgeKind, denom: &str) -> TransferRequest {
	TransferRequest {
		src,
		dst,
		bridge,
		sender: SENDER.to_string(),
		recipient: RECIPIENT.to_string(),
		coin: Coin::new(denom, "1000000"),
	}
}

#[tokio::test]
async fn ibc_transfer_uses_the_registered_channel() {
	let request = request(Chain::Terra, Chain::Cosmos, BridgeKind::Ibc, "uatom");
	let instruction = engine().build_instruction(&request).await.unwrap();

	match instruction {
		TransferInstruction::IbcTransfer(msg) => {
			assert_eq!(msg.source_port, "transfer");
			assert_eq!(msg.source_channel, "channel-0");
			assert_eq!(msg.token.denom, "uatom");
			assert_eq!(msg.token.amount, "1000000");
			assert_eq!(msg.sender, SENDER);
			assert_eq!(msg.receiver, RECIPIENT);
		},
		other => panic!("expected IbcTransfer, got {:?}", other),
	}
}

#[tokio::test]
async fn ibc_timeout_is_within_the_120s_window() {
	let request = request(Chain::Terra, Chain::Cosmos, BridgeKind::Ibc, "uluna");
	let before = (Utc::now().timestamp_millis() as u64) * 1_000_000;
	let instruction = engine().build_instruction(&request).await.unwrap();
	let after = (Utc::now().timestamp_millis() as u64) * 1_000_000;

	let TransferInstruction::IbcTransfer(msg) = instruction else {
		panic!("expected IbcTransfer");
	};
	assert!(msg.timeout_timestamp >= before + 119_000_000_000);
	assert!(msg.timeout_timestamp <= after + 121_000_000_000);
}

#[tokio::test]
async fn unregistered_pair_yields_missing_channel() {
	// No channel registered from terra to juno
	let request = request(Chain::Terra, Chain::Juno, BridgeKind::Ibc, "uluna");
	let err = engine().build_instruction(&request).await.unwrap_err();

	assert!(matches!(
		err,
		RouteError::MissingChannel {
			src: Chain::Terra,
			dst: Chain::Juno,
		}
	));
}

#[tokio::test]
async fn same_chain_is_rejected_for_every_bridge_kind() {
	let engine = engine();
	for bridge in [
		BridgeKind::Ibc,
		BridgeKind::Ics20,
		BridgeKind::Axelar,
		BridgeKind::Wormhole,
	] {
		let request = request(Chain::Terra, Chain::Terra, bridge, "uluna");
		let err = engine.build_instruction(&request).await.unwrap_err();
		assert!(matches!(err, RouteError::SameChainTransfer), "{}", bridge);
	}
}

#[tokio::test]
async fn unsupported_chains_are_rejected_before_dispatch() {
	// Kujira is a known chain but not part of this configuration
	let request = request(Chain::Terra, Chain::Kujira, BridgeKind::Ibc, "uluna");
	let err = engine().build_instruction(&request).await.unwrap_err();
	assert!(matches!(err, RouteError::UnsupportedChain(Chain::Kujira)));
}

#[tokio::test]
async fn malformed_amounts_are_rejected_for_every_bridge_kind() {
	let engine = engine();
	for bridge in [BridgeKind::Ibc, BridgeKind::Ics20, BridgeKind::Axelar] {
		let mut request = request(Chain::Terra, Chain::Osmosis, bridge, "uluna");
		request.coin.amount = "1.5".to_string();
		let err = engine.build_instruction(&request).await.unwrap_err();
		assert!(matches!(err, RouteError::InvalidAmount(_)), "{}", bridge);
	}
}

#[tokio::test]
async fn wormhole_is_not_implemented() {
	let request = request(Chain::Terra, Chain::Osmosis, BridgeKind::Wormhole, "uluna");
	let err = engine().build_instruction(&request).await.unwrap_err();
	assert!(matches!(
		err,
		RouteError::BridgeNotImplemented(BridgeKind::Wormhole)
	));
}

#[tokio::test]
async fn contract_token_outbound_leg_composes_a_contract_send() {
	let request = request(Chain::Terra, Chain::Osmosis, BridgeKind::Ics20, AMP_LUNA);
	let instruction = engine().build_instruction(&request).await.unwrap();

	let TransferInstruction::ContractSend(msg) = instruction else {
		panic!("expected ContractSend");
	};
	assert_eq!(msg.sender, SENDER);
	// The executed contract is the token itself
	assert_eq!(msg.contract, AMP_LUNA);
	assert_eq!(msg.msg.send.contract, ICS20_FORWARDER);
	assert_eq!(msg.msg.send.amount, "1000000");

	use base64::{engine::general_purpose::STANDARD, Engine as _};
	let memo: serde_json::Value =
		serde_json::from_slice(&STANDARD.decode(&msg.msg.send.msg).unwrap()).unwrap();
	assert_eq!(memo["channel"], "channel-26");
	assert_eq!(memo["remote_address"], RECIPIENT);
	assert_eq!(memo["timeout"], 600);
}

#[tokio::test]
async fn wrapped_coin_return_leg_composes_an_ibc_transfer() {
	let request = request(
		Chain::Osmosis,
		Chain::Terra,
		BridgeKind::Ics20,
		AMP_LUNA_ON_OSMOSIS,
	);
	let instruction = engine().build_instruction(&request).await.unwrap();

	let TransferInstruction::IbcTransfer(msg) = instruction else {
		panic!("expected IbcTransfer");
	};
	assert_eq!(msg.source_channel, "channel-341");
	assert_eq!(msg.token.denom, AMP_LUNA_ON_OSMOSIS);
}

#[tokio::test]
async fn outbound_and_return_legs_are_inverse_over_the_same_route() {
	let engine = engine();

	let outbound = request(Chain::Terra, Chain::Osmosis, BridgeKind::Ics20, AMP_LUNA);
	let TransferInstruction::ContractSend(send) =
		engine.build_instruction(&outbound).await.unwrap()
	else {
		panic!("expected ContractSend");
	};

	let ret = request(
		Chain::Osmosis,
		Chain::Terra,
		BridgeKind::Ics20,
		AMP_LUNA_ON_OSMOSIS,
	);
	let TransferInstruction::IbcTransfer(back) = engine.build_instruction(&ret).await.unwrap()
	else {
		panic!("expected IbcTransfer");
	};

	// Same token contract on both legs, origin/counterparty channels swapped
	assert_eq!(send.contract, AMP_LUNA);
	use base64::{engine::general_purpose::STANDARD, Engine as _};
	let memo: serde_json::Value =
		serde_json::from_slice(&STANDARD.decode(&send.msg.send.msg).unwrap()).unwrap();
	assert_eq!(memo["channel"], "channel-26");
	assert_eq!(back.source_channel, "channel-341");
}

#[tokio::test]
async fn wrapped_coin_without_counterparty_channel_is_rejected() {
	// ampLUNA is whitelisted on juno but its route has no juno channel pair,
	// so the error points at the origin chain's route registry
	let request = request(
		Chain::Juno,
		Chain::Terra,
		BridgeKind::Ics20,
		AMP_LUNA_ON_JUNO,
	);
	let err = engine().build_instruction(&request).await.unwrap_err();
	assert!(matches!(
		err,
		RouteError::MissingWrappedRoute {
			chain: Chain::Terra,
			..
		}
	));
}

#[tokio::test]
async fn unlisted_wrapped_coin_names_the_source_chain() {
	// A voucher hash absent from every whitelist table: the error points at
	// the source chain, whose whitelist failed to resolve the asset
	let request = request(
		Chain::Osmosis,
		Chain::Terra,
		BridgeKind::Ics20,
		"ibc/0000000000000000000000000000000000000000000000000000000000000000",
	);
	let err = engine().build_instruction(&request).await.unwrap_err();
	assert!(matches!(
		err,
		RouteError::MissingWrappedRoute {
			chain: Chain::Osmosis,
			..
		}
	));
}

#[tokio::test]
async fn native_coins_cannot_use_the_wrapped_bridge() {
	let request = request(Chain::Terra, Chain::Osmosis, BridgeKind::Ics20, "uluna");
	let err = engine().build_instruction(&request).await.unwrap_err();
	assert!(matches!(err, RouteError::UnsupportedAsset { .. }));
}

#[tokio::test]
async fn relay_route_sends_to_the_resolved_deposit_address() {
	let resolver = MockResolver::answering(DEPOSIT_ADDRESS);
	let calls = resolver.call_counter();
	let engine = engine_with(resolver);

	let request = request(Chain::Terra, Chain::Osmosis, BridgeKind::Axelar, "uusdc");
	let instruction = engine.build_instruction(&request).await.unwrap();

	let TransferInstruction::RelayedTransfer {
		deposit_address,
		transfer,
	} = instruction
	else {
		panic!("expected RelayedTransfer");
	};
	assert_eq!(deposit_address, DEPOSIT_ADDRESS);
	assert_eq!(transfer.receiver, DEPOSIT_ADDRESS);
	assert_eq!(transfer.source_channel, "channel-6");
	assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_relay_channel_short_circuits_before_any_network_call() {
	let resolver = MockResolver::answering(DEPOSIT_ADDRESS);
	let calls = resolver.call_counter();
	let engine = engine_with(resolver);

	// Juno has no relay edge in the fixture topology
	let request = request(Chain::Juno, Chain::Terra, BridgeKind::Axelar, "uusdc");
	let err = engine.build_instruction(&request).await.unwrap_err();

	assert!(matches!(err, RouteError::MissingRelayChannel(Chain::Juno)));
	assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn relay_failure_surfaces_as_deposit_address_unavailable() {
	let engine = engine_with(MockResolver::failing());

	let request = request(Chain::Terra, Chain::Osmosis, BridgeKind::Axelar, "uusdc");
	let err = engine.build_instruction(&request).await.unwrap_err();
	assert!(matches!(err, RouteError::DepositAddressUnavailable(_)));
}

#[tokio::test]
async fn concurrent_calls_share_one_engine_without_locking() {
	let engine = Arc::new(engine());

	let mut handles = Vec::new();
	for dst in [Chain::Cosmos, Chain::Osmosis] {
		let engine = Arc::clone(&engine);
		handles.push(tokio::spawn(async move {
			let request = request(Chain::Terra, dst, BridgeKind::Ibc, "uluna");
			engine.build_instruction(&request).await
		}));
	}

	for handle in handles {
		assert!(handle.await.unwrap().is_ok());
	}
}
