//! GeniusBridge Adapters
//!
//! HTTP transport and request dispatch for the GeniusBridge service.

pub mod dispatcher;
pub mod http_transport;

pub use dispatcher::{Dispatcher, PRICE_ENDPOINT, QUOTE_ENDPOINT};
pub use genius_bridge_types::{BridgeTransport, TransportError, TransportResult};
pub use http_transport::HttpTransport;
