//! Price and quote pipeline
//!
//! Each call runs validate → normalize → dispatch once. A failure at any
//! stage ends the call; nothing is retried.

use std::sync::Arc;

use genius_bridge_adapters::Dispatcher;
use genius_bridge_types::{
	BridgeLogger, BridgeResult, ChainId, PriceRequest, PriceResponse, QuoteRequest,
	QuoteResponse,
};

use crate::normalizer::{normalize_price_request, normalize_quote_request};
use crate::validator::RequestValidator;

#[derive(Debug, Clone)]
pub struct QuotingService {
	validator: RequestValidator,
	dispatcher: Dispatcher,
	logger: Arc<dyn BridgeLogger>,
}

impl QuotingService {
	pub fn new(
		validator: RequestValidator,
		dispatcher: Dispatcher,
		logger: Arc<dyn BridgeLogger>,
	) -> Self {
		Self {
			validator,
			dispatcher,
			logger,
		}
	}

	pub fn chains(&self) -> &[ChainId] {
		self.validator.chains()
	}

	pub fn base_url(&self) -> &str {
		self.dispatcher.base_url()
	}

	pub async fn fetch_price(&self, request: &PriceRequest) -> BridgeResult<PriceResponse> {
		self.validator.validate_price(request)?;

		let normalized = normalize_price_request(request);
		self.logger.debug(&format!(
			"Fetching price {} -> {} for {} {}",
			normalized.network_in, normalized.network_out, normalized.amount_in, normalized.token_in
		));

		self.dispatcher.dispatch_price(&normalized).await
	}

	pub async fn fetch_quote(&self, request: &QuoteRequest) -> BridgeResult<QuoteResponse> {
		self.validator.validate_quote(request)?;

		let payload = normalize_quote_request(request);
		self.logger.debug(&format!(
			"Fetching quote {} -> {} for {} {} (receiver {})",
			payload.price.network_in,
			payload.price.network_out,
			payload.price.amount_in,
			payload.price.token_in,
			payload.to
		));

		self.dispatcher.dispatch_quote(&payload).await
	}
}
