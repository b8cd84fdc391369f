//! Stand-in bridge service for end-to-end tests
//!
//! Serves both quoting routes on an ephemeral port and records every request
//! it receives.

use std::sync::{Arc, Mutex};

use axum::{
	extract::State,
	http::{header, HeaderMap, StatusCode, Uri},
	response::{IntoResponse, Response},
	routing::post,
	Router,
};
use genius_bridge_sdk::serde_json::Value;
use genius_bridge_sdk::PRICE_ENDPOINT;
use tokio::task::JoinHandle;

/// A request the test server received
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
	pub path: String,
	pub body: Value,
	pub user_agent: Option<String>,
	pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
enum Reply {
	Json { price: Value, quote: Value },
	Status { status: StatusCode, body: String },
	Raw(String),
}

#[derive(Clone)]
struct ServerState {
	reply: Reply,
	received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Test server instance
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
	received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

#[allow(dead_code)]
impl TestServer {
	/// Answer price and quote calls with the given bodies
	pub async fn spawn_responding(
		price: Value,
		quote: Value,
	) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_reply(Reply::Json { price, quote }).await
	}

	/// Answer every call with `status` and a plain-text body
	pub async fn spawn_failing(
		status: StatusCode,
		body: &str,
	) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_reply(Reply::Status {
			status,
			body: body.to_string(),
		})
		.await
	}

	/// Answer every call with 200 and `body` verbatim, JSON or not
	pub async fn spawn_raw(body: &str) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_reply(Reply::Raw(body.to_string())).await
	}

	async fn spawn_with_reply(reply: Reply) -> Result<Self, Box<dyn std::error::Error>> {
		let received = Arc::new(Mutex::new(Vec::new()));
		let state = ServerState {
			reply,
			received: Arc::clone(&received),
		};

		let app = Router::new()
			.route("/quoting/price", post(handle))
			.route("/quoting/quote", post(handle))
			.with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self {
			base_url,
			handle,
			received,
		})
	}

	pub fn received(&self) -> Vec<ReceivedRequest> {
		self.received.lock().unwrap().clone()
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn handle(
	State(state): State<ServerState>,
	uri: Uri,
	headers: HeaderMap,
	body: String,
) -> Response {
	let header_text = |name: &str| {
		headers
			.get(name)
			.and_then(|value| value.to_str().ok())
			.map(str::to_string)
	};

	state.received.lock().unwrap().push(ReceivedRequest {
		path: uri.path().to_string(),
		body: genius_bridge_sdk::serde_json::from_str(&body).unwrap_or(Value::Null),
		user_agent: header_text("user-agent"),
		api_key: header_text("x-api-key"),
	});

	match state.reply {
		Reply::Json { price, quote } => {
			let body = if uri.path() == PRICE_ENDPOINT {
				price
			} else {
				quote
			};
			(
				StatusCode::OK,
				[(header::CONTENT_TYPE, "application/json")],
				body.to_string(),
			)
				.into_response()
		},
		Reply::Status { status, body } => (status, body).into_response(),
		Reply::Raw(body) => (
			StatusCode::OK,
			[(header::CONTENT_TYPE, "application/json")],
			body,
		)
			.into_response(),
	}
}
