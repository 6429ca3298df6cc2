/*
[INPUT]:  Order parameters, API key/secret and nonce provider
[OUTPUT]: Funds, order placement/cancellation and order state
[POS]:    HTTP layer - private trade endpoints (signed form POST)
[UPDATE]: When adding new private endpoints or changing parameters
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::request::FormParams;
use crate::http::{BterClient, Result};
use crate::types::{OrderIdRequest, OrderType, PairRequest, PlaceOrderRequest};

impl BterClient {
    /// Account balances
    ///
    /// POST /private/getfunds
    pub async fn get_funds(&self) -> Result<Value> {
        self.private_request("getfunds", FormParams::new()).await
    }

    /// Place a limit order
    ///
    /// POST /private/placeorder
    pub async fn trade(
        &self,
        pair: &str,
        order_type: OrderType,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<Value> {
        self.place_order(&PlaceOrderRequest::new(pair, order_type, rate, amount))
            .await
    }

    /// POST /private/placeorder
    pub async fn place_order(&self, req: &PlaceOrderRequest) -> Result<Value> {
        self.private_request("placeorder", req.to_params()).await
    }

    /// Own trades for a pair
    ///
    /// POST /private/mytrades
    pub async fn my_trades(&self, pair: &str) -> Result<Value> {
        self.private_request("mytrades", PairRequest::new(pair).to_params())
            .await
    }

    /// POST /private/cancelorder
    pub async fn cancel_order(&self, order_id: impl ToString) -> Result<Value> {
        self.private_request("cancelorder", OrderIdRequest::new(order_id).to_params())
            .await
    }

    /// Status of a single order
    ///
    /// POST /private/getorder
    pub async fn get_order(&self, order_id: impl ToString) -> Result<Value> {
        self.private_request("getorder", OrderIdRequest::new(order_id).to_params())
            .await
    }

    /// Open orders
    ///
    /// POST /private/orderlist
    pub async fn order_list(&self) -> Result<Value> {
        self.private_request("orderlist", FormParams::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::signer::sign;
    use crate::http::{BterClient, BterError, ClientConfig, ErrorKind};
    use crate::types::OrderType;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const NONCE: u64 = 1_400_000_000;

    fn client(server: &MockServer, key: &str, secret: &str) -> BterClient {
        let config = ClientConfig {
            private_url: format!("{}/private", server.uri()),
            public_url: format!("{}/public", server.uri()),
            ..ClientConfig::default()
        }
        .with_nonce(|| NONCE);
        BterClient::with_config(key, secret, config).expect("client init")
    }

    async fn mount_signed(
        server: &MockServer,
        endpoint: &str,
        body: &str,
        response: serde_json::Value,
    ) {
        Mock::given(method("POST"))
            .and(path(format!("/private/{endpoint}")))
            .and(header("KEY", "key"))
            .and(header("SIGN", sign("secret", body).as_str()))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_trade() {
        let server = MockServer::start().await;
        let body = format!("pair=btc_usd&order_type=buy&rate=100&amount=1&nonce={NONCE}");
        let response = json!({"result": "true", "order_id": 123, "msg": "Success"});
        mount_signed(&server, "placeorder", &body, response.clone()).await;

        let result = client(&server, "key", "secret")
            .trade("btc_usd", OrderType::Buy, Decimal::from(100), Decimal::from(1))
            .await
            .expect("trade failed");

        assert_eq!(result, response);
    }

    #[tokio::test]
    async fn test_get_funds_and_order_list() {
        let server = MockServer::start().await;
        let body = format!("nonce={NONCE}");
        let funds = json!({"result": "true", "available_funds": {"BTC": "1.5"}});
        let orders = json!({"result": "true", "orders": []});
        mount_signed(&server, "getfunds", &body, funds.clone()).await;
        mount_signed(&server, "orderlist", &body, orders.clone()).await;

        let client = client(&server, "key", "secret");
        assert_eq!(client.get_funds().await.expect("get_funds"), funds);
        assert_eq!(client.order_list().await.expect("order_list"), orders);
    }

    #[tokio::test]
    async fn test_order_endpoints() {
        let server = MockServer::start().await;
        let by_id = format!("order_id=42&nonce={NONCE}");
        let by_pair = format!("pair=ltc_btc&nonce={NONCE}");
        mount_signed(&server, "cancelorder", &by_id, json!({"result": "true"})).await;
        let order = json!({"result": "true", "order": {"id": "42"}});
        mount_signed(&server, "getorder", &by_id, order).await;
        let trades = json!({"result": "true", "trades": []});
        mount_signed(&server, "mytrades", &by_pair, trades).await;

        let client = client(&server, "key", "secret");
        client.cancel_order(42).await.expect("cancel_order");
        let order = client.get_order("42").await.expect("get_order");
        assert_eq!(order["order"]["id"], "42");
        client.my_trades("ltc_btc").await.expect("my_trades");
    }

    #[tokio::test]
    async fn test_exchange_error_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/private/getfunds"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "invalid nonce"})),
            )
            .mount(&server)
            .await;

        let err = client(&server, "key", "secret")
            .get_funds()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ApiError);
        assert_eq!(err.to_string(), "API error: invalid nonce");
    }

    #[tokio::test]
    async fn test_missing_credentials_never_hit_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server, "", "secret")
            .cancel_order(1)
            .await
            .unwrap_err();
        assert!(matches!(err, BterError::MissingCredentials));
    }
}
