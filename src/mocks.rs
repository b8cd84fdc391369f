//! Mock transport and logger for examples and testing
//!
//! `MockTransport` stands in for the HTTP layer and records every call, so
//! tests can assert on dispatched bodies or on the absence of a network call.
//! `RecordingLogger` keeps every log record in memory.

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use genius_bridge_types::serde_json::Value;
use genius_bridge_types::{BridgeLogger, BridgeTransport, TransportError, TransportResult};

/// A request the mock transport received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
	pub url: String,
	pub body: Value,
}

#[derive(Debug, Clone)]
enum MockReply {
	Respond(Value),
	Fail(String),
}

/// In-memory `BridgeTransport` with call tracking
///
/// Clones share the same call log.
#[derive(Debug, Clone)]
pub struct MockTransport {
	reply: MockReply,
	call_count: Arc<AtomicUsize>,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
	/// Transport answering every call with `body`
	pub fn responding(body: Value) -> Self {
		Self::with_reply(MockReply::Respond(body))
	}

	/// Transport failing every call with `message`
	pub fn failing(message: impl Into<String>) -> Self {
		Self::with_reply(MockReply::Fail(message.into()))
	}

	fn with_reply(reply: MockReply) -> Self {
		Self {
			reply,
			call_count: Arc::new(AtomicUsize::new(0)),
			requests: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn call_count(&self) -> usize {
		self.call_count.load(Ordering::SeqCst)
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	pub fn last_request(&self) -> Option<RecordedRequest> {
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.last()
			.cloned()
	}
}

#[async_trait]
impl BridgeTransport for MockTransport {
	async fn post_json(&self, url: &str, body: &Value) -> TransportResult<Value> {
		self.call_count.fetch_add(1, Ordering::SeqCst);
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(RecordedRequest {
				url: url.to_string(),
				body: body.clone(),
			});

		match &self.reply {
			MockReply::Respond(body) => Ok(body.clone()),
			MockReply::Fail(message) => Err(TransportError::Other(message.clone())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
	Debug,
	Info,
	Warn,
	Error,
}

/// One record captured by `RecordingLogger`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
	pub level: LogLevel,
	pub message: String,
	/// Display text of the attached error, if any
	pub error: Option<String>,
}

/// `BridgeLogger` keeping every record in memory
///
/// Clones share the same record list.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
	records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogger {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn records(&self) -> Vec<LogRecord> {
		self.records
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// Messages logged at `level`, oldest first
	pub fn messages(&self, level: LogLevel) -> Vec<String> {
		self.records()
			.into_iter()
			.filter(|record| record.level == level)
			.map(|record| record.message)
			.collect()
	}

	fn push(&self, level: LogLevel, message: &str, error: Option<String>) {
		self.records
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(LogRecord {
				level,
				message: message.to_string(),
				error,
			});
	}
}

impl BridgeLogger for RecordingLogger {
	fn debug(&self, message: &str) {
		self.push(LogLevel::Debug, message, None);
	}

	fn info(&self, message: &str) {
		self.push(LogLevel::Info, message, None);
	}

	fn warn(&self, message: &str) {
		self.push(LogLevel::Warn, message, None);
	}

	fn error(&self, message: &str, error: Option<&(dyn Error + 'static)>) {
		self.push(LogLevel::Error, message, error.map(|e| e.to_string()));
	}
}
