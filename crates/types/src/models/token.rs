//! Native token sentinels
//!
//! On EVM networks the gas token has no contract address; callers may pass a
//! symbolic alias, the zero address, or the conventional `0xEeee…` marker, and
//! the SDK sends the marker to the bridge service. Solana has no such rewrite:
//! callers pass the wrapped SOL mint explicitly.

use super::network::ChainId;

/// Marker address the bridge service uses for EVM native tokens
pub const NATIVE_TOKEN_ADDRESS: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// Wrapped SOL mint, the Solana counterpart callers supply themselves
pub const SOL_NATIVE_ADDRESS: &str = "So11111111111111111111111111111111111111112";

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Case-insensitive spellings recognized as "the native token"
const NATIVE_TOKEN_ALIASES: [&str; 9] = [
	"native",
	"eth",
	"matic",
	"pol",
	"bnb",
	"avax",
	"sonic",
	ZERO_ADDRESS,
	NATIVE_TOKEN_ADDRESS,
];

/// Whether `token` is one of the native token aliases
pub fn is_native_token(token: &str) -> bool {
	NATIVE_TOKEN_ALIASES
		.iter()
		.any(|alias| alias.eq_ignore_ascii_case(token))
}

/// Canonical native marker for a network, if its family has one
pub fn native_token_marker(network: ChainId) -> Option<&'static str> {
	network.is_evm().then_some(NATIVE_TOKEN_ADDRESS)
}
