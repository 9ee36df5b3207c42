//! Transfer domain models
//!
//! Requests coming in from callers, instructions going out to the
//! signer/broadcaster, and the routing errors in between.

pub mod errors;
pub mod instruction;
pub mod request;

pub use errors::RouteError;
pub use instruction::{
	ibc_timeout_timestamp, Cw20Send, Cw20SendBody, Ics20TransferMemo, MsgExecuteContract,
	MsgTransfer, TransferInstruction, IBC_TIMEOUT_MS, IBC_TRANSFER_PORT,
	ICS20_MEMO_TIMEOUT_SECS,
};
pub use request::{Coin, TransferRequest};
