//! Tracing-backed logger and subscriber setup

use std::error::Error;

use genius_bridge_types::BridgeLogger;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::settings::{LogFormat, LoggingSettings};

/// Default `BridgeLogger`: forwards records to the `tracing` macros
///
/// Where the records end up is decided by whichever subscriber the host
/// application installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
	pub fn new() -> Self {
		Self
	}

	/// Logger backed by a console subscriber at debug verbosity
	///
	/// `RUST_LOG` still wins when set. If a global subscriber already exists it
	/// is kept and records flow to it instead.
	pub fn console_debug() -> Self {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
		if tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_target(true)
			.try_init()
			.is_err()
		{
			debug!("Global tracing subscriber already installed, reusing it");
		}
		Self
	}
}

impl BridgeLogger for TracingLogger {
	fn debug(&self, message: &str) {
		debug!("{}", message);
	}

	fn info(&self, message: &str) {
		info!("{}", message);
	}

	fn warn(&self, message: &str) {
		warn!("{}", message);
	}

	fn error(&self, message: &str, err: Option<&(dyn Error + 'static)>) {
		match err {
			Some(e) => error!("{}: {}", message, e),
			None => error!("{}", message),
		}
	}
}

/// Install a global subscriber according to the logging settings
///
/// Intended for host applications and binaries; library code only emits records.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), Box<dyn Error + Send + Sync>> {
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

	match settings.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
			if settings.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);
			if settings.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);
			if settings.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
	}?;

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.level, settings.format, settings.structured
	);

	Ok(())
}
