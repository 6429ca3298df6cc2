/*
[INPUT]:  Trading pair identifier (e.g., "btc_cny")
[OUTPUT]: Market data (tickers, depth, trade history)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bter_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no authentication required)
///
/// Run with `RUST_LOG=bter_adapter=debug` to see each dispatched request.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bter Market Data Example ===\n");

    let client = match BterClient::public() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pair = "btc_cny";

    println!("Querying market list...");
    match client.market_list().await {
        Ok(list) => println!("✓ Markets: {}", list),
        Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
    }

    println!("\nQuerying ticker for {}...", pair);
    match client.ticker(pair).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
    }

    println!("\nQuerying depth for {}...", pair);
    match client.depth(pair).await {
        Ok(depth) => println!("✓ Depth: {}", depth),
        Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
    }

    println!("\nQuerying trade history for {}...", pair);
    match client.trade_history(pair).await {
        Ok(trades) => println!("✓ Trades: {}", trades),
        Err(e) => println!("✗ Error ({:?}): {}", e.kind(), e),
    }

    println!("\n✓ Market data example complete");
}
