//! Domain models, organized by business entity

pub mod assets;
pub mod bridges;
pub mod chains;
pub mod transfers;

pub use assets::{classify, AssetKind, IBC_DENOM_PREFIX};
pub use bridges::BridgeKind;
pub use chains::Chain;
pub use transfers::{
	Coin, Cw20Send, Cw20SendBody, Ics20TransferMemo, MsgExecuteContract, MsgTransfer, RouteError,
	TransferInstruction, TransferRequest,
};
