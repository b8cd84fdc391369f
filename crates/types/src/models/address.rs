//! Address primitives for the two supported chain families
//!
//! EVM addresses are `0x`-prefixed 20-byte hex strings. Mixed case is accepted
//! without checksum verification: every well-formed address can be normalized
//! into its checksummed form by the remote service.
//!
//! Solana addresses are base58-encoded 32-byte public keys.

use thiserror::Error;

/// Length of an EVM address in bytes
pub const EVM_ADDRESS_LEN: usize = 20;

/// Length of a Solana public key in bytes
pub const SOLANA_ADDRESS_LEN: usize = 32;

/// Reasons an address fails to parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
	#[error("address is empty")]
	Empty,

	#[error("missing 0x prefix")]
	MissingPrefix,

	#[error("invalid hex: {0}")]
	InvalidHex(String),

	#[error("invalid base58: {0}")]
	InvalidBase58(String),

	#[error("invalid length: expected {expected} bytes, got {actual}")]
	InvalidLength { expected: usize, actual: usize },
}

pub type AddressResult<T> = Result<T, AddressError>;

/// Parse an EVM address into its 20 raw bytes
///
/// Mixed-case input is accepted without EIP-55 checksum verification; the
/// bridge service normalizes checksums itself.
pub fn validate_evm_address(address: &str) -> AddressResult<[u8; EVM_ADDRESS_LEN]> {
	if address.is_empty() {
		return Err(AddressError::Empty);
	}

	let digits = address
		.strip_prefix("0x")
		.or_else(|| address.strip_prefix("0X"))
		.ok_or(AddressError::MissingPrefix)?;

	let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex(e.to_string()))?;

	<[u8; EVM_ADDRESS_LEN]>::try_from(bytes.as_slice()).map_err(|_| AddressError::InvalidLength {
		expected: EVM_ADDRESS_LEN,
		actual: bytes.len(),
	})
}

/// Parse a Solana address into its 32 raw bytes
pub fn validate_solana_address(address: &str) -> AddressResult<[u8; SOLANA_ADDRESS_LEN]> {
	if address.is_empty() {
		return Err(AddressError::Empty);
	}

	let bytes = bs58::decode(address)
		.into_vec()
		.map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

	<[u8; SOLANA_ADDRESS_LEN]>::try_from(bytes.as_slice()).map_err(|_| {
		AddressError::InvalidLength {
			expected: SOLANA_ADDRESS_LEN,
			actual: bytes.len(),
		}
	})
}
