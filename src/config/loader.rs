//! Configuration loading utilities

use crate::config::{Settings, SettingsError};
use config::{Config, File};

/// Load router settings from a configuration file.
///
/// `path` is passed without extension; TOML, JSON and YAML are accepted.
pub fn load_config(path: &str) -> Result<Settings, SettingsError> {
	let raw = Config::builder()
		.add_source(File::with_name(path))
		.build()?;

	Ok(raw.try_deserialize()?)
}
