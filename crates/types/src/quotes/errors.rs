//! Error types for price and quote operations
//!
//! Message texts are part of the public contract: callers match on them.

use thiserror::Error;

use crate::models::ChainId;

/// A request broke one of the bridge's domain rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Single chain swaps are not supported by GeniusBridge")]
	SingleChainSwap,

	#[error("Network {network} not supported by GeniusBridge")]
	UnsupportedNetwork { network: ChainId },

	#[error("Amount in must be greater than 0")]
	ZeroAmount,

	#[error("Invalid Solana token address: {address}")]
	InvalidSolanaTokenAddress { address: String },

	#[error("Invalid EVM token address: {address}")]
	InvalidEvmTokenAddress { address: String },

	#[error("From address is required for quote")]
	MissingFromAddress,

	#[error("Invalid Solana receiver address: {address}")]
	InvalidSolanaReceiverAddress { address: String },

	#[error("Invalid EVM receiver address: {address}")]
	InvalidEvmReceiverAddress { address: String },
}

/// Errors returned by the SDK's public operations
#[derive(Error, Debug)]
pub enum BridgeError {
	/// Raised before any network call; never wrapped
	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error("Failed to fetch GeniusBridge price, error: {message}")]
	PriceFetch { message: String },

	#[error("Failed to fetch GeniusBridge quote, error: {message}")]
	QuoteFetch { message: String },

	#[error("Configuration error: {reason}")]
	Config { reason: String },
}

impl BridgeError {
	/// The validation rule that rejected the request, if that is what failed
	pub fn validation(&self) -> Option<&ValidationError> {
		match self {
			BridgeError::Validation(error) => Some(error),
			_ => None,
		}
	}

	pub fn is_validation(&self) -> bool {
		self.validation().is_some()
	}
}
