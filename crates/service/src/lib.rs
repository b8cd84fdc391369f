//! GeniusBridge Service
//!
//! Validation, normalization and the price/quote pipeline.

pub mod normalizer;
pub mod quoting;
pub mod validator;

pub use normalizer::{normalize_price_request, normalize_quote_request, resolve_native_token};
pub use quoting::QuotingService;
pub use validator::RequestValidator;
