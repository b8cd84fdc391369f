//! Price and quote domain models

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{BridgeError, ValidationError};
pub use request::{Authority, PriceRequest, QuotePayload, QuoteRequest};
pub use response::{
	EvmExecutionPayload, ExecutionPayload, FeesBreakdown, PriceResponse, QuoteResponse,
};

/// Result type for public SDK operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Result type for request validation
pub type ValidationResult<T> = Result<T, ValidationError>;
