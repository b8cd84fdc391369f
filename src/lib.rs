//! GeniusBridge SDK
//!
//! Client for GeniusBridge cross-chain price and quote requests. Requests are
//! validated and normalized locally, then forwarded to the bridge service in
//! a single POST per call.

use std::sync::Arc;

// Core domain types
pub use genius_bridge_types::{
	// External dependencies for convenience
	serde_json,
	Authority,
	// Errors
	BridgeError,
	// Seams
	BridgeLogger,
	BridgeResult,
	BridgeTransport,
	ChainId,
	EvmExecutionPayload,
	ExecutionPayload,
	FeesBreakdown,
	// Requests and responses
	PriceRequest,
	PriceResponse,
	QuotePayload,
	QuoteRequest,
	QuoteResponse,
	TransportError,
	TransportResult,
	ValidationError,
	VmFamily,
	DEFAULT_SUPPORTED_CHAINS,
	NATIVE_TOKEN_ADDRESS,
	SOL_NATIVE_ADDRESS,
};

// Adapters
pub use genius_bridge_adapters::{Dispatcher, HttpTransport, PRICE_ENDPOINT, QUOTE_ENDPOINT};

// Service layer
pub use genius_bridge_service::{QuotingService, RequestValidator};

// Config
pub use genius_bridge_config::{
	init_tracing, load_config, log_sdk_info, Settings, TracingLogger, DEFAULT_BASE_URL,
};

// Module aliases for advanced usage
pub mod models {
	pub use genius_bridge_types::*;
}

pub mod config {
	pub use genius_bridge_config::*;
}

pub mod adapters {
	pub use genius_bridge_adapters::*;
}

pub mod service {
	pub use genius_bridge_service::*;
}

pub mod mocks;

// Re-export external dependencies for custom transports
pub use async_trait;
pub use reqwest;

/// Construction options recognized by the SDK
///
/// `debug` takes precedence over `logger` when both are set.
#[derive(Debug, Clone, Default)]
pub struct GeniusBridgeConfig {
	/// Overrides the default bridge service host
	pub genius_bridge_base_url: Option<String>,
	/// Log to the console at debug verbosity
	pub debug: bool,
	/// Caller-provided log sink
	pub logger: Option<Arc<dyn BridgeLogger>>,
}

/// Cross-chain price and quote client
///
/// Cheap to clone; clones share the HTTP connection pool and logger.
#[derive(Debug, Clone)]
pub struct GeniusBridgeSdk {
	service: Arc<QuotingService>,
}

impl GeniusBridgeSdk {
	/// Client with default settings against the default host
	pub fn new() -> BridgeResult<Self> {
		Self::builder().build()
	}

	pub fn builder() -> GeniusBridgeBuilder {
		GeniusBridgeBuilder::new()
	}

	/// Client from the construction options record
	pub fn from_config(config: GeniusBridgeConfig) -> BridgeResult<Self> {
		Self::builder().with_config(config).build()
	}

	/// Networks this client accepts
	pub fn chains(&self) -> &[ChainId] {
		self.service.chains()
	}

	/// Bridge service base URL, without a trailing slash
	pub fn base_url(&self) -> &str {
		self.service.base_url()
	}

	/// Price a cross-chain swap
	pub async fn fetch_price(&self, request: &PriceRequest) -> BridgeResult<PriceResponse> {
		self.service.fetch_price(request).await
	}

	/// Quote a cross-chain swap, including its execution payload
	pub async fn fetch_quote(&self, request: &QuoteRequest) -> BridgeResult<QuoteResponse> {
		self.service.fetch_quote(request).await
	}
}

/// Builder pattern for configuring the SDK
#[derive(Debug, Default)]
pub struct GeniusBridgeBuilder {
	settings: Settings,
	base_url: Option<String>,
	chains: Option<Vec<ChainId>>,
	debug: Option<bool>,
	logger: Option<Arc<dyn BridgeLogger>>,
	transport: Option<Arc<dyn BridgeTransport>>,
}

impl GeniusBridgeBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder seeded from `config/genius-bridge.*` and `GENIUS_BRIDGE__*` variables
	pub fn from_loaded_config() -> BridgeResult<Self> {
		let settings = load_config().map_err(|e| BridgeError::Config {
			reason: e.to_string(),
		})?;
		Ok(Self::new().with_settings(settings))
	}

	/// Apply the construction options record
	pub fn with_config(mut self, config: GeniusBridgeConfig) -> Self {
		if let Some(base_url) = config.genius_bridge_base_url {
			self.base_url = Some(base_url);
		}
		if config.debug {
			self.debug = Some(true);
		}
		if let Some(logger) = config.logger {
			self.logger = Some(logger);
		}
		self
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Replace the supported chain list
	pub fn with_chains(mut self, chains: Vec<ChainId>) -> Self {
		self.chains = Some(chains);
		self
	}

	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = Some(debug);
		self
	}

	pub fn with_logger(mut self, logger: Arc<dyn BridgeLogger>) -> Self {
		self.logger = Some(logger);
		self
	}

	/// Send requests through a custom transport instead of HTTP
	pub fn with_transport(mut self, transport: Arc<dyn BridgeTransport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn build(self) -> BridgeResult<GeniusBridgeSdk> {
		let mut settings = self.settings;
		if let Some(base_url) = self.base_url {
			settings.bridge.base_url = base_url;
		}
		if let Some(chains) = self.chains {
			settings.bridge.supported_chains = Some(chains);
		}
		settings.validate().map_err(|e| BridgeError::Config {
			reason: e.to_string(),
		})?;

		let logger: Arc<dyn BridgeLogger> = if self.debug.unwrap_or(settings.debug) {
			Arc::new(TracingLogger::console_debug())
		} else {
			self.logger
				.unwrap_or_else(|| Arc::new(TracingLogger::new()))
		};

		let transport: Arc<dyn BridgeTransport> = match self.transport {
			Some(transport) => transport,
			None => Arc::new(
				HttpTransport::new(&settings.bridge.user_agent, settings.bridge.headers.as_ref())
					.map_err(|e| BridgeError::Config {
						reason: format!("Failed to create HTTP client: {}", e),
					})?,
			),
		};

		let chains = settings.supported_chains();
		log_sdk_info(logger.as_ref(), settings.base_url(), &chains);

		let service = QuotingService::new(
			RequestValidator::new(chains, Arc::clone(&logger)),
			Dispatcher::new(settings.base_url(), transport, Arc::clone(&logger)),
			logger,
		);

		Ok(GeniusBridgeSdk {
			service: Arc::new(service),
		})
	}
}
