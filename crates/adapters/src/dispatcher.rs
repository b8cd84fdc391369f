//! Dispatch of normalized requests to the bridge service
//!
//! Each call issues exactly one POST. Any failure (transport, status, body
//! decoding) is logged with the original error and surfaced under a fixed
//! price/quote prefix.

use std::sync::Arc;

use genius_bridge_types::{
	BridgeError, BridgeLogger, BridgeResult, BridgeTransport, PriceRequest, PriceResponse,
	QuotePayload, QuoteResponse, TransportResult,
};
use serde::{de::DeserializeOwned, Serialize};

/// Route for price requests, relative to the base URL
pub const PRICE_ENDPOINT: &str = "/quoting/price";

/// Route for quote requests, relative to the base URL
pub const QUOTE_ENDPOINT: &str = "/quoting/quote";

#[derive(Debug, Clone)]
pub struct Dispatcher {
	base_url: String,
	transport: Arc<dyn BridgeTransport>,
	logger: Arc<dyn BridgeLogger>,
}

impl Dispatcher {
	pub fn new(
		base_url: impl Into<String>,
		transport: Arc<dyn BridgeTransport>,
		logger: Arc<dyn BridgeLogger>,
	) -> Self {
		let base_url = base_url.into().trim_end_matches('/').to_string();
		Self {
			base_url,
			transport,
			logger,
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn price_url(&self) -> String {
		format!("{}{}", self.base_url, PRICE_ENDPOINT)
	}

	pub fn quote_url(&self) -> String {
		format!("{}{}", self.base_url, QUOTE_ENDPOINT)
	}

	/// Send a normalized price request and return the service's body
	pub async fn dispatch_price(&self, request: &PriceRequest) -> BridgeResult<PriceResponse> {
		self.post(&self.price_url(), request).await.map_err(|e| {
			self.logger.error("Failed to fetch price", Some(&e));
			BridgeError::PriceFetch {
				message: e.to_string(),
			}
		})
	}

	/// Send a normalized quote payload and return the service's body
	pub async fn dispatch_quote(&self, payload: &QuotePayload) -> BridgeResult<QuoteResponse> {
		self.post(&self.quote_url(), payload).await.map_err(|e| {
			self.logger.error("Failed to fetch quote", Some(&e));
			BridgeError::QuoteFetch {
				message: e.to_string(),
			}
		})
	}

	async fn post<B, R>(&self, url: &str, body: &B) -> TransportResult<R>
	where
		B: Serialize + ?Sized,
		R: DeserializeOwned,
	{
		let body = serde_json::to_value(body)?;
		self.logger.debug(&format!("Dispatching request to {}", url));

		let response = self.transport.post_json(url, &body).await?;
		Ok(serde_json::from_value(response)?)
	}
}
