//! Blockchain network models

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Virtual machine family a network executes transactions with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmFamily {
	/// Account-model chains: 20-byte hex addresses, tokens identified by contract address
	Evm,
	/// Instruction-list chains: 32-byte base58 public keys
	Svm,
}

/// Network identifier not known to this SDK
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chain id: {0}")]
pub struct UnknownChainError(pub u64);

/// Networks the bridge service knows about
///
/// Serialized as the numeric chain id, which is what the remote service expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
	Ethereum,
	Arbitrum,
	Optimism,
	Polygon,
	Bsc,
	Avalanche,
	Base,
	Solana,
	Sonic,
}

/// Chains a default client accepts. Sonic is an EVM network but is not listed here.
pub const DEFAULT_SUPPORTED_CHAINS: [ChainId; 8] = [
	ChainId::Ethereum,
	ChainId::Arbitrum,
	ChainId::Optimism,
	ChainId::Polygon,
	ChainId::Bsc,
	ChainId::Avalanche,
	ChainId::Base,
	ChainId::Solana,
];

impl ChainId {
	/// Every network variant, supported by default or not
	pub const ALL: [ChainId; 9] = [
		ChainId::Ethereum,
		ChainId::Arbitrum,
		ChainId::Optimism,
		ChainId::Polygon,
		ChainId::Bsc,
		ChainId::Avalanche,
		ChainId::Base,
		ChainId::Solana,
		ChainId::Sonic,
	];

	/// Numeric chain id used on the wire
	pub fn id(self) -> u64 {
		match self {
			ChainId::Ethereum => 1,
			ChainId::Arbitrum => 42161,
			ChainId::Optimism => 10,
			ChainId::Polygon => 137,
			ChainId::Bsc => 56,
			ChainId::Avalanche => 43114,
			ChainId::Base => 8453,
			ChainId::Solana => 1399811149,
			ChainId::Sonic => 146,
		}
	}

	/// Human-readable network name
	pub fn name(self) -> &'static str {
		match self {
			ChainId::Ethereum => "Ethereum",
			ChainId::Arbitrum => "Arbitrum",
			ChainId::Optimism => "Optimism",
			ChainId::Polygon => "Polygon",
			ChainId::Bsc => "BSC",
			ChainId::Avalanche => "Avalanche",
			ChainId::Base => "Base",
			ChainId::Solana => "Solana",
			ChainId::Sonic => "Sonic",
		}
	}

	/// Chain family of this network
	pub fn family(self) -> VmFamily {
		match self {
			ChainId::Solana => VmFamily::Svm,
			ChainId::Ethereum
			| ChainId::Arbitrum
			| ChainId::Optimism
			| ChainId::Polygon
			| ChainId::Bsc
			| ChainId::Avalanche
			| ChainId::Base
			| ChainId::Sonic => VmFamily::Evm,
		}
	}

	pub fn is_evm(self) -> bool {
		self.family() == VmFamily::Evm
	}

	pub fn is_svm(self) -> bool {
		self.family() == VmFamily::Svm
	}
}

impl TryFrom<u64> for ChainId {
	type Error = UnknownChainError;

	fn try_from(id: u64) -> Result<Self, Self::Error> {
		ChainId::ALL
			.into_iter()
			.find(|chain| chain.id() == id)
			.ok_or(UnknownChainError(id))
	}
}

impl From<ChainId> for u64 {
	fn from(chain: ChainId) -> Self {
		chain.id()
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.id())
	}
}
