//! Price and quote response models
//!
//! The bridge service's bodies are returned to callers as received. Every
//! modelled field is optional and anything else is kept in `extra`, so any
//! JSON object decodes and serializes back unchanged, apart from explicit
//! nulls on modelled fields. Networks stay as raw ids; `source_network()`
//! maps them onto `ChainId` when the id is known.
//!
//! Approval, permit and arbitrary-call descriptors the service may attach
//! to quotes are not modelled and travel in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::request::Authority;
use crate::models::{ChainId, VmFamily};

/// Fee breakdown attached to prices and quotes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeesBreakdown {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub base: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bps: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub insurance: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub total: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Body returned by `POST /quoting/price`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_in: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_out: Option<String>,
	/// Source chain id as sent by the service
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub network_in: Option<u64>,
	/// Destination chain id as sent by the service
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub network_out: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount_in: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount_out: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_amount_out: Option<String>,
	/// Kept as a JSON number so `1` and `1.0` both survive unchanged
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slippage: Option<Number>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fee: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fees_details: Option<FeesBreakdown>,
	/// Fields this SDK does not model
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl PriceResponse {
	/// Source network, when the service named one this SDK knows
	pub fn source_network(&self) -> Option<ChainId> {
		self.network_in.and_then(|id| ChainId::try_from(id).ok())
	}

	/// Destination network, when the service named one this SDK knows
	pub fn destination_network(&self) -> Option<ChainId> {
		self.network_out.and_then(|id| ChainId::try_from(id).ok())
	}
}

/// Call the sender submits on an EVM source chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvmExecutionPayload {
	/// Contract to call
	pub to: String,
	/// ABI-encoded call data
	pub data: String,
	/// Native value to attach, in wei
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

/// Execution payload selected by the source chain's family
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExecutionPayload<'a> {
	Evm(&'a EvmExecutionPayload),
	/// Ordered instruction descriptors for an SVM source chain
	Svm(&'a [Value]),
}

/// Body returned by `POST /quoting/quote`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	#[serde(flatten)]
	pub price: PriceResponse,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub seed: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub authority: Option<Authority>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub evm_execution_payload: Option<EvmExecutionPayload>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub svm_execution_payload: Option<Vec<Value>>,
}

impl QuoteResponse {
	/// Payload matching the family of `networkIn`, if the service sent one
	///
	/// With an unknown or missing source network, whichever payload is
	/// present is returned, EVM first.
	pub fn execution_payload(&self) -> Option<ExecutionPayload<'_>> {
		let evm = || self.evm_execution_payload.as_ref().map(ExecutionPayload::Evm);
		let svm = || {
			self.svm_execution_payload
				.as_deref()
				.map(ExecutionPayload::Svm)
		};

		match self.price.source_network().map(ChainId::family) {
			Some(VmFamily::Evm) => evm(),
			Some(VmFamily::Svm) => svm(),
			None => evm().or_else(svm),
		}
	}
}
