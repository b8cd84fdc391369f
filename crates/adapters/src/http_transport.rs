//! HTTP transport for the bridge service
//!
//! One reqwest client is built per transport and reused for every call, so
//! connections are pooled across price and quote requests.

use async_trait::async_trait;
use genius_bridge_types::{BridgeTransport, TransportError, TransportResult};
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client,
};
use serde_json::Value;
use std::{collections::HashMap, str::FromStr};
use tracing::{debug, warn};

/// `BridgeTransport` over HTTP using reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	/// Create a transport sending `user_agent` and any extra `headers`
	pub fn new(user_agent: &str, headers: Option<&HashMap<String, String>>) -> TransportResult<Self> {
		let client = Self::create_client(user_agent, headers)?;
		Ok(Self { client })
	}

	fn create_client(
		user_agent: &str,
		extra_headers: Option<&HashMap<String, String>>,
	) -> TransportResult<Client> {
		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		match HeaderValue::from_str(user_agent) {
			Ok(value) => {
				headers.insert("User-Agent", value);
			},
			Err(_) => warn!("Ignoring invalid User-Agent header value: {}", user_agent),
		}

		if let Some(extra_headers) = extra_headers {
			for (key, value) in extra_headers {
				match (HeaderName::from_str(key), HeaderValue::from_str(value)) {
					(Ok(header_name), Ok(header_value)) => {
						headers.insert(header_name, header_value);
					},
					_ => warn!("Ignoring invalid header: {}", key),
				}
			}
		}

		Client::builder()
			.default_headers(headers)
			.build()
			.map_err(TransportError::Http)
	}
}

#[async_trait]
impl BridgeTransport for HttpTransport {
	async fn post_json(&self, url: &str, body: &Value) -> TransportResult<Value> {
		debug!("POST {}", url);

		let response = self.client.post(url).json(body).send().await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			debug!("POST {} returned status {}: {}", url, status, body);
			return Err(TransportError::HttpStatus {
				status: status.as_u16(),
				body,
			});
		}

		let bytes = response.bytes().await?;
		let value = serde_json::from_slice(&bytes)?;

		debug!("POST {} succeeded with status {}", url, status);
		Ok(value)
	}
}
