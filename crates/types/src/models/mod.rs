//! Shared domain models: networks, addresses and native tokens

pub mod address;
pub mod network;
pub mod token;

pub use address::{
	validate_evm_address, validate_solana_address, AddressError, AddressResult, EVM_ADDRESS_LEN,
	SOLANA_ADDRESS_LEN,
};
pub use network::{ChainId, UnknownChainError, VmFamily, DEFAULT_SUPPORTED_CHAINS};
pub use token::{is_native_token, native_token_marker, NATIVE_TOKEN_ADDRESS, SOL_NATIVE_ADDRESS};
