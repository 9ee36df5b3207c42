//! Composed transfer instructions
//!
//! These are the engine's output: pure data matching the on-chain message
//! schemas, handed to an external signer/broadcaster. They hold no
//! connection or key material.

use crate::models::transfers::Coin;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// IBC transfer messages always use the `transfer` port
pub const IBC_TRANSFER_PORT: &str = "transfer";

/// Packet timeout horizon for plain IBC transfers, in milliseconds.
/// Long enough that slow block production does not expire the packet,
/// short enough to bound locked-fund exposure on timeout.
pub const IBC_TIMEOUT_MS: i64 = 120_000;

/// Memo timeout for the contract-send leg, in seconds. Longer than the
/// plain-IBC horizon because this leg crosses two hops (contract execution
/// plus the forwarded IBC packet).
pub const ICS20_MEMO_TIMEOUT_SECS: u64 = 600;

/// IBC `MsgTransfer`, serialized with the on-chain field names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MsgTransfer {
	pub source_port: String,
	pub source_channel: String,
	pub token: Coin,
	pub sender: String,
	pub receiver: String,
	/// Absolute packet timeout, unix nanoseconds
	pub timeout_timestamp: u64,
}

impl MsgTransfer {
	/// Build a transfer message with the standard port and timeout horizon
	pub fn new(
		source_channel: impl Into<String>,
		token: Coin,
		sender: impl Into<String>,
		receiver: impl Into<String>,
	) -> Self {
		Self {
			source_port: IBC_TRANSFER_PORT.to_string(),
			source_channel: source_channel.into(),
			token,
			sender: sender.into(),
			receiver: receiver.into(),
			timeout_timestamp: ibc_timeout_timestamp(),
		}
	}
}

/// Current time plus the IBC timeout horizon, in unix nanoseconds
pub fn ibc_timeout_timestamp() -> u64 {
	((Utc::now().timestamp_millis() + IBC_TIMEOUT_MS) as u64) * 1_000_000
}

/// Wasm `MsgExecuteContract` targeting a cw20 token contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MsgExecuteContract {
	pub sender: String,
	/// The cw20 token contract being executed
	pub contract: String,
	pub msg: Cw20Send,
}

/// cw20 `send` payload forwarding tokens to the ICS-20 bridge contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cw20Send {
	pub send: Cw20SendBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cw20SendBody {
	/// The ICS-20 forwarding contract receiving the tokens
	pub contract: String,
	pub amount: String,
	/// Base64 of the UTF-8 JSON transfer memo
	pub msg: String,
}

impl Cw20Send {
	pub fn new(forwarding_contract: impl Into<String>, amount: impl Into<String>, memo: &Ics20TransferMemo) -> Self {
		Self {
			send: Cw20SendBody {
				contract: forwarding_contract.into(),
				amount: amount.into(),
				msg: memo.to_base64(),
			},
		}
	}
}

/// Inner memo of the ICS-20 contract-send flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ics20TransferMemo {
	pub channel: String,
	pub remote_address: String,
	/// Relative timeout in seconds
	pub timeout: u64,
}

impl Ics20TransferMemo {
	pub fn new(channel: impl Into<String>, remote_address: impl Into<String>) -> Self {
		Self {
			channel: channel.into(),
			remote_address: remote_address.into(),
			timeout: ICS20_MEMO_TIMEOUT_SECS,
		}
	}

	/// Encode as base64 of UTF-8 JSON, the shape the bridge contract expects
	pub fn to_base64(&self) -> String {
		let json = serde_json::json!({
			"channel": self.channel,
			"remote_address": self.remote_address,
			"timeout": self.timeout,
		});
		BASE64.encode(json.to_string())
	}
}

/// The engine's result: exactly one protocol message shape per route kind
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransferInstruction {
	/// Plain IBC coin transfer over a direct or wrapped-return channel
	IbcTransfer(MsgTransfer),
	/// Outbound wrapped-asset leg: execute the token contract's `send`
	ContractSend(MsgExecuteContract),
	/// Relay route: an IBC transfer addressed to a one-time deposit address
	RelayedTransfer {
		deposit_address: String,
		transfer: MsgTransfer,
	},
}
