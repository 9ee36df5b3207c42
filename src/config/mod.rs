//! Router configuration
//!
//! serde settings structures, file loading, and startup logging.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{ChannelPairConfig, Settings, WrappedRouteConfig};
pub use startup_logger::log_router_configuration;

use crate::registry::RegistryError;
use thiserror::Error;

/// Configuration failure: either the file could not be loaded or the data
/// failed registry validation. Both are fatal at startup.
#[derive(Error, Debug)]
pub enum SettingsError {
	#[error("failed to load configuration: {0}")]
	Load(#[from] config::ConfigError),

	#[error("invalid registry configuration: {0}")]
	Registry(#[from] RegistryError),
}
