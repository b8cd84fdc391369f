//! GeniusBridge Types
//!
//! Shared models, errors and traits for the GeniusBridge SDK.
//! This crate contains all domain models organized by concern.

pub mod logging;
pub mod models;
pub mod quotes;
pub mod transport;

// Re-export serde_json for convenience
pub use serde_json;

pub use logging::BridgeLogger;

pub use models::{
	is_native_token, native_token_marker, validate_evm_address, validate_solana_address,
	AddressError, AddressResult, ChainId, UnknownChainError, VmFamily, DEFAULT_SUPPORTED_CHAINS,
	NATIVE_TOKEN_ADDRESS, SOL_NATIVE_ADDRESS,
};

pub use quotes::{
	Authority, BridgeError, BridgeResult, EvmExecutionPayload, ExecutionPayload, FeesBreakdown,
	PriceRequest, PriceResponse, QuotePayload, QuoteRequest, QuoteResponse, ValidationError,
	ValidationResult,
};

pub use transport::{BridgeTransport, TransportError, TransportResult};
