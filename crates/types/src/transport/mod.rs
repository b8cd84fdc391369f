//! Transport seam between the dispatcher and the bridge service

pub mod errors;
pub mod traits;

pub use errors::TransportError;
pub use traits::BridgeTransport;

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;
