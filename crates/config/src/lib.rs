//! GeniusBridge Configuration
//!
//! Configuration management and logging setup for the GeniusBridge SDK.

pub mod loader;
pub mod logging;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use logging::{init_tracing, TracingLogger};
pub use settings::{
	BridgeSettings, ConfigValidationError, LogFormat, LoggingSettings, Settings, DEFAULT_BASE_URL,
	DEFAULT_USER_AGENT,
};
pub use startup_logger::log_sdk_info;
