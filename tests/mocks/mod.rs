//! Centralized mocks and fixtures for testing
//!
//! Request fixtures mirror real token and wallet addresses per network; the
//! test server stands in for the bridge service over HTTP.

pub mod fixtures;
pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use fixtures::TestConstants;
#[allow(unused_imports)]
pub use test_server::TestServer;
