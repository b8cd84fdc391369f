//! Logging collaborator used by the validator and dispatcher
//!
//! A client owns a single `Arc<dyn BridgeLogger>` and hands it to every stage it
//! builds. Implementations only receive append-style records.

use std::error::Error;
use std::fmt::Debug;

pub trait BridgeLogger: Send + Sync + Debug {
	fn debug(&self, message: &str);

	fn info(&self, message: &str);

	fn warn(&self, message: &str);

	/// Record a failure, with the underlying error when there is one
	fn error(&self, message: &str, error: Option<&(dyn Error + 'static)>);
}
