//! Configuration settings structures

use genius_bridge_types::{ChainId, DEFAULT_SUPPORTED_CHAINS};
use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, str::FromStr};
use thiserror::Error;
use url::Url;

/// Default bridge service host
pub const DEFAULT_BASE_URL: &str = "https://bridge-api.tradegeniuses.net";

/// Default User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("genius-bridge-sdk/", env!("CARGO_PKG_VERSION"));

/// Main SDK settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub bridge: BridgeSettings,
	pub logging: LoggingSettings,
	/// Install a console logger at debug verbosity
	pub debug: bool,
}

/// Bridge service connection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BridgeSettings {
	pub base_url: String,
	pub user_agent: String,
	/// Extra headers sent with every request
	pub headers: Option<HashMap<String, String>>,
	/// Overrides the default supported chain list
	pub supported_chains: Option<Vec<ChainId>>,
}

impl Default for BridgeSettings {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			user_agent: DEFAULT_USER_AGENT.to_string(),
			headers: None,
			supported_chains: None,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Settings that cannot produce a working client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
	#[error("Invalid base URL '{url}': {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	#[error("Supported chain list is empty")]
	NoSupportedChains,

	#[error("Invalid header '{name}'")]
	InvalidHeader { name: String },

	#[error("Invalid value for header '{name}'")]
	InvalidHeaderValue { name: String },
}

impl Settings {
	/// Base URL without a trailing slash
	pub fn base_url(&self) -> &str {
		self.bridge.base_url.trim_end_matches('/')
	}

	/// Chains the client accepts
	pub fn supported_chains(&self) -> Vec<ChainId> {
		self.bridge
			.supported_chains
			.clone()
			.unwrap_or_else(|| DEFAULT_SUPPORTED_CHAINS.to_vec())
	}

	/// Check the settings can produce a working client
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		let url = Url::parse(&self.bridge.base_url).map_err(|e| {
			ConfigValidationError::InvalidBaseUrl {
				url: self.bridge.base_url.clone(),
				reason: e.to_string(),
			}
		})?;

		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigValidationError::InvalidBaseUrl {
				url: self.bridge.base_url.clone(),
				reason: format!("unsupported scheme '{}'", url.scheme()),
			});
		}

		if self
			.bridge
			.supported_chains
			.as_ref()
			.is_some_and(|chains| chains.is_empty())
		{
			return Err(ConfigValidationError::NoSupportedChains);
		}

		if HeaderValue::from_str(&self.bridge.user_agent).is_err() {
			return Err(ConfigValidationError::InvalidHeaderValue {
				name: "User-Agent".to_string(),
			});
		}

		for (name, value) in self.bridge.headers.iter().flatten() {
			if HeaderName::from_str(name).is_err() {
				return Err(ConfigValidationError::InvalidHeader { name: name.clone() });
			}
			if HeaderValue::from_str(value).is_err() {
				return Err(ConfigValidationError::InvalidHeaderValue { name: name.clone() });
			}
		}

		Ok(())
	}
}
