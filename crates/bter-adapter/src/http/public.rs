/*
[INPUT]:  Trading pair identifiers
[OUTPUT]: Market data (market info, tickers, depth, trade history)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use serde_json::Value;

use crate::http::{BterClient, Result};

impl BterClient {
    /// GET /marketinfo
    pub async fn market_info(&self) -> Result<Value> {
        self.public_request("marketinfo", "").await
    }

    /// GET /marketlist
    pub async fn market_list(&self) -> Result<Value> {
        self.public_request("marketlist", "").await
    }

    /// Tickers for every pair
    ///
    /// GET /tickers
    pub async fn tickers(&self) -> Result<Value> {
        self.public_request("tickers", "").await
    }

    /// GET /ticker/{pair}
    pub async fn ticker(&self, pair: &str) -> Result<Value> {
        self.public_request("ticker", pair).await
    }

    /// Order book depth
    ///
    /// GET /depth/{pair}
    pub async fn depth(&self, pair: &str) -> Result<Value> {
        self.public_request("depth", pair).await
    }

    /// Recent public trades
    ///
    /// GET /trade/{pair}
    pub async fn trade_history(&self, pair: &str) -> Result<Value> {
        self.public_request("trade", pair).await
    }
}
