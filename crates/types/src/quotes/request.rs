//! Price and quote request models
//!
//! Field names follow the bridge service's camelCase JSON body.

use serde::{Deserialize, Serialize};

use crate::models::ChainId;

/// Request body for `POST /quoting/price`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
	/// Source network
	pub network_in: ChainId,
	/// Destination network
	pub network_out: ChainId,
	/// Token sold on the source network (address or native alias)
	pub token_in: String,
	/// Token bought on the destination network (address or native alias)
	pub token_out: String,
	/// Amount in base units, as a decimal string
	pub amount_in: String,
	/// Maximum accepted slippage, in percent
	pub slippage: f64,
	/// Sender address on the source network
	#[serde(default)]
	pub from: String,
}

impl PriceRequest {
	pub fn new(
		network_in: ChainId,
		network_out: ChainId,
		token_in: impl Into<String>,
		token_out: impl Into<String>,
		amount_in: impl Into<String>,
		slippage: f64,
		from: impl Into<String>,
	) -> Self {
		Self {
			network_in,
			network_out,
			token_in: token_in.into(),
			token_out: token_out.into(),
			amount_in: amount_in.into(),
			slippage,
			from: from.into(),
		}
	}
}

/// Request for `POST /quoting/quote` as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	#[serde(flatten)]
	pub price: PriceRequest,
	/// Receiver on the destination network; defaults to `from`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub to: Option<String>,
}

impl QuoteRequest {
	pub fn new(price: PriceRequest) -> Self {
		Self { price, to: None }
	}

	pub fn with_receiver(mut self, to: impl Into<String>) -> Self {
		self.to = Some(to.into());
		self
	}

	/// Explicit receiver, with an empty string treated as absent
	pub fn receiver(&self) -> Option<&str> {
		self.to.as_deref().filter(|to| !to.is_empty())
	}

	/// Receiver the quote will settle to: the explicit one, else the sender
	pub fn effective_receiver(&self) -> &str {
		self.receiver().unwrap_or(&self.price.from)
	}
}

impl From<PriceRequest> for QuoteRequest {
	fn from(price: PriceRequest) -> Self {
		Self::new(price)
	}
}

/// Sender/receiver pair the bridge uses to authorize execution on both ends
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Authority {
	pub network_in_address: String,
	pub network_out_address: String,
}

/// Normalized body sent to `POST /quoting/quote`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
	#[serde(flatten)]
	pub price: PriceRequest,
	pub to: String,
	pub authority: Authority,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn price() -> PriceRequest {
		PriceRequest::new(
			ChainId::Ethereum,
			ChainId::Solana,
			"0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
			"So11111111111111111111111111111111111111112",
			"1000000000000000000",
			0.5,
			"0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
		)
	}

	#[test]
	fn test_price_request_wire_shape() {
		let json = serde_json::to_value(price()).unwrap();
		assert_eq!(
			json,
			json!({
				"networkIn": 1,
				"networkOut": 1399811149,
				"tokenIn": "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
				"tokenOut": "So11111111111111111111111111111111111111112",
				"amountIn": "1000000000000000000",
				"slippage": 0.5,
				"from": "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6"
			})
		);
	}

	#[test]
	fn test_quote_request_flattens_price_fields() {
		let request =
			QuoteRequest::new(price()).with_receiver("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM");
		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(json["networkIn"], json!(1));
		assert_eq!(json["to"], json!("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM"));

		let parsed: QuoteRequest = serde_json::from_value(json).unwrap();
		assert_eq!(parsed, request);
	}

	#[test]
	fn test_quote_request_without_from_deserializes_empty() {
		let parsed: QuoteRequest = serde_json::from_value(json!({
			"networkIn": 1,
			"networkOut": 137,
			"tokenIn": "ETH",
			"tokenOut": "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359",
			"amountIn": "1",
			"slippage": 0.5
		}))
		.unwrap();
		assert_eq!(parsed.price.from, "");
		assert!(parsed.to.is_none());
	}

	#[test]
	fn test_effective_receiver_defaults_to_sender() {
		let request = QuoteRequest::new(price());
		assert_eq!(request.receiver(), None);
		assert_eq!(request.effective_receiver(), request.price.from);

		let request = QuoteRequest::new(price()).with_receiver("");
		assert_eq!(request.receiver(), None);
		assert_eq!(request.effective_receiver(), request.price.from);

		let request = QuoteRequest::new(price()).with_receiver("receiver");
		assert_eq!(request.effective_receiver(), "receiver");
	}
}
