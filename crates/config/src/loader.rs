//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

/// Default configuration file, looked up without extension
pub const DEFAULT_CONFIG_FILE: &str = "config/genius-bridge";

/// Prefix for environment overrides, e.g. `GENIUS_BRIDGE__BRIDGE__BASE_URL`
pub const ENV_PREFIX: &str = "GENIUS_BRIDGE";

#[derive(Error, Debug)]
pub enum ConfigLoadError {
	#[error("Failed to load configuration: {0}")]
	Source(#[from] ConfigError),

	#[error("Configuration is invalid: {0}")]
	Invalid(#[from] crate::settings::ConfigValidationError),
}

/// Load configuration from the default file and environment
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from(DEFAULT_CONFIG_FILE)
}

/// Load configuration from `path` (optional) with environment overrides on top
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__"),
		)
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}
