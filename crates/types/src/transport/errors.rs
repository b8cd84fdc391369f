//! Error types for transport operations

use thiserror::Error;

/// Failure while talking to the bridge service
#[derive(Error, Debug)]
pub enum TransportError {
	#[error("{0}")]
	Http(#[from] reqwest::Error),

	#[error("Request failed with status code {status}")]
	HttpStatus { status: u16, body: String },

	#[error("Invalid response body: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("{0}")]
	Other(String),
}

impl TransportError {
	/// HTTP status returned by the service, if one was received
	pub fn status_code(&self) -> Option<u16> {
		match self {
			TransportError::HttpStatus { status, .. } => Some(*status),
			TransportError::Http(error) => error.status().map(|status| status.as_u16()),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_code_extraction() {
		let error = TransportError::HttpStatus {
			status: 503,
			body: "unavailable".to_string(),
		};
		assert_eq!(error.status_code(), Some(503));
		assert_eq!(error.to_string(), "Request failed with status code 503");

		let error = TransportError::Other("API Error".to_string());
		assert_eq!(error.status_code(), None);
		assert_eq!(error.to_string(), "API Error");
	}

	#[test]
	fn test_decode_error_message() {
		let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
		let error = TransportError::from(decode);
		assert!(error.to_string().starts_with("Invalid response body:"));
	}
}
