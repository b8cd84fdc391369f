//! Core transport trait for user implementations

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use super::TransportResult;

/// Sends a JSON body to the bridge service and returns the decoded JSON reply
///
/// The SDK ships an HTTP implementation; tests and embedders can provide their
/// own to intercept calls.
#[async_trait]
pub trait BridgeTransport: Send + Sync + Debug {
	/// POST `body` to `url`, returning the parsed response body on a 2xx status
	async fn post_json(&self, url: &str, body: &Value) -> TransportResult<Value>;
}
