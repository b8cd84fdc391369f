//! Token, address and response fixtures shared by integration tests

use genius_bridge_sdk::serde_json::{json, Value};
use genius_bridge_sdk::{ChainId, PriceRequest, QuoteRequest, NATIVE_TOKEN_ADDRESS};

/// Test data constants
#[allow(dead_code)]
pub struct TestConstants;

#[allow(dead_code)]
impl TestConstants {
	pub const EVM_SENDER: &'static str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";
	pub const EVM_RECEIVER: &'static str = "0x1111111111111111111111111111111111111111";
	pub const SOLANA_WALLET: &'static str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

	pub const SOLANA_USDC: &'static str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
	pub const SOLANA_BONK: &'static str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
	pub const SONIC_USDC: &'static str = "0x29219dd400f2Bf60E5a23d13Be72B486D4038894";

	pub const ONE_ETH_WEI: &'static str = "1000000000000000000";
	pub const TEN_USDC: &'static str = "10000000";
	pub const MEDIUM_SLIPPAGE: f64 = 0.5;
}

/// USDC contract per EVM network
#[allow(dead_code)]
pub fn usdc(network: ChainId) -> &'static str {
	match network {
		ChainId::Ethereum => "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
		ChainId::Polygon => "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359",
		ChainId::Bsc => "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d",
		ChainId::Avalanche => "0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E",
		ChainId::Base => "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
		ChainId::Arbitrum => "0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
		ChainId::Optimism => "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85",
		ChainId::Sonic => TestConstants::SONIC_USDC,
		ChainId::Solana => TestConstants::SOLANA_USDC,
	}
}

/// 1 ETH on Ethereum for USDC on Polygon, with the native token given by alias
#[allow(dead_code)]
pub fn eth_to_polygon_price() -> PriceRequest {
	PriceRequest::new(
		ChainId::Ethereum,
		ChainId::Polygon,
		"ETH",
		usdc(ChainId::Polygon),
		TestConstants::ONE_ETH_WEI,
		TestConstants::MEDIUM_SLIPPAGE,
		TestConstants::EVM_SENDER,
	)
}

#[allow(dead_code)]
pub fn eth_to_polygon_quote() -> QuoteRequest {
	QuoteRequest::new(eth_to_polygon_price())
}

/// 10 USDC on Solana for USDC on Base
#[allow(dead_code)]
pub fn solana_to_base_quote() -> QuoteRequest {
	QuoteRequest::new(PriceRequest::new(
		ChainId::Solana,
		ChainId::Base,
		TestConstants::SOLANA_USDC,
		usdc(ChainId::Base),
		TestConstants::TEN_USDC,
		TestConstants::MEDIUM_SLIPPAGE,
		TestConstants::SOLANA_WALLET,
	))
	.with_receiver(TestConstants::EVM_SENDER)
}

/// Price body for the Ethereum → Polygon fixture, including a field the SDK does not model
#[allow(dead_code)]
pub fn price_response_body() -> Value {
	json!({
		"tokenIn": NATIVE_TOKEN_ADDRESS,
		"tokenOut": usdc(ChainId::Polygon),
		"networkIn": 1,
		"networkOut": 137,
		"amountIn": TestConstants::ONE_ETH_WEI,
		"amountOut": "2500000000",
		"minAmountOut": "2487500000",
		"slippage": 0.5,
		"fee": "1000000",
		"feesDetails": {
			"base": "500000",
			"bps": "500000",
			"insurance": "0",
			"total": "1000000"
		},
		"priceImpact": "0.01"
	})
}

/// Quote body for the Ethereum → Polygon fixture
#[allow(dead_code)]
pub fn evm_quote_response_body() -> Value {
	let mut body = price_response_body();
	let map = body
		.as_object_mut()
		.expect("price fixture is a JSON object");
	map.insert("seed".to_string(), json!("0x8f2a"));
	map.insert(
		"authority".to_string(),
		json!({
			"networkInAddress": TestConstants::EVM_SENDER,
			"networkOutAddress": TestConstants::EVM_SENDER
		}),
	);
	map.insert(
		"evmExecutionPayload".to_string(),
		json!({
			"to": "0x5c7BCd6E7De5423a257D81B442095A1a6ced35C5",
			"data": "0x12345678",
			"value": TestConstants::ONE_ETH_WEI
		}),
	);
	body
}

/// Quote body for the Solana → Base fixture
#[allow(dead_code)]
pub fn svm_quote_response_body() -> Value {
	json!({
		"tokenIn": TestConstants::SOLANA_USDC,
		"tokenOut": usdc(ChainId::Base),
		"networkIn": 1399811149,
		"networkOut": 8453,
		"amountIn": TestConstants::TEN_USDC,
		"amountOut": "9950000",
		"minAmountOut": "9900250",
		"slippage": 0.5,
		"fee": "50000",
		"feesDetails": {
			"base": "25000",
			"bps": "25000",
			"insurance": "0",
			"total": "50000"
		},
		"seed": "7Hk2",
		"authority": {
			"networkInAddress": TestConstants::SOLANA_WALLET,
			"networkOutAddress": TestConstants::EVM_SENDER
		},
		"svmExecutionPayload": [
			{ "programId": "ComputeBudget111111111111111111111111111111", "data": "AwAAAA==" },
			{ "programId": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA", "data": "DAAAAA==" }
		]
	})
}
