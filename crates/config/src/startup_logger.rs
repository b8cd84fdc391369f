//! Client startup logging for the GeniusBridge SDK

use genius_bridge_types::{BridgeLogger, ChainId};

/// Logs client information once a client has been constructed
pub fn log_sdk_info(logger: &dyn BridgeLogger, base_url: &str, chains: &[ChainId]) {
	let service_name = "genius-bridge-sdk";
	let service_version = env!("CARGO_PKG_VERSION");

	logger.info(&format!(
		"GeniusBridge SDK {} v{} initialized",
		service_name, service_version
	));
	logger.debug(&format!("Bridge endpoint: {}", base_url));
	logger.debug(&format!(
		"Supported chains: {}",
		chains
			.iter()
			.map(|chain| format!("{} ({})", chain.name(), chain.id()))
			.collect::<Vec<_>>()
			.join(", ")
	));
	logger.debug(&format!(
		"Initialized at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	));
}
