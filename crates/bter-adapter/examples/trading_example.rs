/*
[INPUT]:  BTER_API_KEY / BTER_SECRET environment variables
[OUTPUT]: Funds, open orders and the signed form of an order request
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use std::str::FromStr;

use bter_adapter::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Example: Trading operations (requires API key + secret)
///
/// Private endpoints are signed with HMAC-SHA512 over the form body.
/// Without credentials every call fails locally with `MissingCredentials`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bter Trading Example ===\n");

    let api_key = std::env::var("BTER_API_KEY").unwrap_or_default();
    let secret = std::env::var("BTER_SECRET").unwrap_or_default();

    // Counter nonce avoids collisions when several calls land in the same second
    let client = match BterClient::with_nonce(api_key, secret, CounterNonce::from_clock()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let order = PlaceOrderRequest::new(
        "btc_cny",
        OrderType::Buy,
        Decimal::from_str("100").unwrap_or_default(),
        Decimal::from_str("0.01").unwrap_or_default(),
    );
    match client.requests().build_authenticated("placeorder", order.to_params()) {
        Ok(request) => {
            println!("\nSigned order request (not sent):");
            println!("  POST {}", request.url);
            println!("  body: {}", request.body.unwrap_or_default());
        }
        Err(e) => println!("\n✗ Cannot sign order: {}", e),
    }

    println!("\nQuerying funds...");
    match client.get_funds().await {
        Ok(funds) => println!("✓ Funds: {}", funds),
        Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
    }

    println!("\nQuerying open orders...");
    match client.order_list().await {
        Ok(orders) => println!("✓ Orders: {}", orders),
        Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
    }

    // In production:
    // let response = client.place_order(&order).await?;

    println!("\n✓ Trading example complete");
}
