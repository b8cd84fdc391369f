//! Canonical wire form for validated requests

use genius_bridge_types::{
	is_native_token, native_token_marker, Authority, ChainId, PriceRequest, QuotePayload,
	QuoteRequest,
};

/// Rewrite a native token alias to the network's marker address
///
/// Only EVM networks have a marker; Solana tokens pass through untouched.
pub fn resolve_native_token(network: ChainId, token: &str) -> String {
	match native_token_marker(network) {
		Some(marker) if is_native_token(token) => marker.to_string(),
		_ => token.to_string(),
	}
}

pub fn normalize_price_request(request: &PriceRequest) -> PriceRequest {
	PriceRequest {
		token_in: resolve_native_token(request.network_in, &request.token_in),
		token_out: resolve_native_token(request.network_out, &request.token_out),
		..request.clone()
	}
}

/// Normalize the price fields, then settle the receiver and the authority pair
pub fn normalize_quote_request(request: &QuoteRequest) -> QuotePayload {
	let price = normalize_price_request(&request.price);
	let to = request.effective_receiver().to_string();
	let authority = Authority {
		network_in_address: price.from.clone(),
		network_out_address: to.clone(),
	};

	QuotePayload {
		price,
		to,
		authority,
	}
}
