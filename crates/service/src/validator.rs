//! Request validation
//!
//! Rules are checked in a fixed order and the first failing rule is the one
//! reported. Every rejection is logged at error level with the same message
//! before it is returned.

use std::sync::Arc;

use genius_bridge_types::{
	is_native_token, validate_evm_address, validate_solana_address, BridgeLogger, ChainId,
	PriceRequest, QuoteRequest, ValidationError, ValidationResult, VmFamily,
};

/// Checks price and quote requests against the client's chain set
#[derive(Debug, Clone)]
pub struct RequestValidator {
	chains: Vec<ChainId>,
	logger: Arc<dyn BridgeLogger>,
}

impl RequestValidator {
	pub fn new(chains: Vec<ChainId>, logger: Arc<dyn BridgeLogger>) -> Self {
		Self { chains, logger }
	}

	/// Networks this validator treats as supported
	pub fn chains(&self) -> &[ChainId] {
		&self.chains
	}

	pub fn is_supported(&self, network: ChainId) -> bool {
		self.chains.contains(&network)
	}

	pub fn validate_price(&self, request: &PriceRequest) -> ValidationResult<()> {
		self.check_price(request).map_err(|e| self.reject(e))
	}

	/// Price rules first, then the quote-only sender/receiver rules
	pub fn validate_quote(&self, request: &QuoteRequest) -> ValidationResult<()> {
		self.check_price(&request.price)
			.and_then(|()| check_quote_parties(request))
			.map_err(|e| self.reject(e))
	}

	fn check_price(&self, request: &PriceRequest) -> ValidationResult<()> {
		if request.network_in == request.network_out {
			return Err(ValidationError::SingleChainSwap);
		}

		for network in [request.network_in, request.network_out] {
			if !self.is_supported(network) {
				return Err(ValidationError::UnsupportedNetwork { network });
			}
		}

		if request.amount_in == "0" {
			return Err(ValidationError::ZeroAmount);
		}

		check_token(request.network_in, &request.token_in)?;
		check_token(request.network_out, &request.token_out)
	}

	fn reject(&self, error: ValidationError) -> ValidationError {
		self.logger.error(&error.to_string(), None);
		error
	}
}

fn check_token(network: ChainId, token: &str) -> ValidationResult<()> {
	match network.family() {
		VmFamily::Svm => validate_solana_address(token)
			.map(|_| ())
			.map_err(|_| ValidationError::InvalidSolanaTokenAddress {
				address: token.to_string(),
			}),
		VmFamily::Evm if is_native_token(token) => Ok(()),
		VmFamily::Evm => validate_evm_address(token)
			.map(|_| ())
			.map_err(|_| ValidationError::InvalidEvmTokenAddress {
				address: token.to_string(),
			}),
	}
}

fn check_quote_parties(request: &QuoteRequest) -> ValidationResult<()> {
	if request.price.from.is_empty() {
		return Err(ValidationError::MissingFromAddress);
	}

	let Some(receiver) = request.receiver() else {
		return Ok(());
	};

	match request.price.network_out.family() {
		VmFamily::Svm => validate_solana_address(receiver)
			.map(|_| ())
			.map_err(|_| ValidationError::InvalidSolanaReceiverAddress {
				address: receiver.to_string(),
			}),
		VmFamily::Evm => validate_evm_address(receiver)
			.map(|_| ())
			.map_err(|_| ValidationError::InvalidEvmReceiverAddress {
				address: receiver.to_string(),
			}),
	}
}
