/*
[INPUT]:  Caller-supplied order and query parameters
[OUTPUT]: Ordered form parameters for private endpoints
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OrderType;
use crate::http::request::FormParams;

/// Parameters of `placeorder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub pair: String,
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl PlaceOrderRequest {
    pub fn new(
        pair: impl Into<String>,
        order_type: OrderType,
        rate: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            pair: pair.into(),
            order_type,
            rate,
            amount,
        }
    }

    /// `pair`, `order_type`, `rate`, `amount`, in that order.
    ///
    /// Decimals are written without trailing zeros.
    pub fn to_params(&self) -> FormParams {
        FormParams::new()
            .with("pair", &self.pair)
            .with("order_type", self.order_type)
            .with("rate", self.rate.normalize())
            .with("amount", self.amount.normalize())
    }
}

/// Parameters of `cancelorder` and `getorder`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIdRequest {
    pub order_id: String,
}

impl OrderIdRequest {
    pub fn new(order_id: impl ToString) -> Self {
        Self {
            order_id: order_id.to_string(),
        }
    }

    pub fn to_params(&self) -> FormParams {
        FormParams::new().with("order_id", &self.order_id)
    }
}

/// Parameters of `mytrades`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRequest {
    pub pair: String,
}

impl PairRequest {
    pub fn new(pair: impl Into<String>) -> Self {
        Self { pair: pair.into() }
    }

    pub fn to_params(&self) -> FormParams {
        FormParams::new().with("pair", &self.pair)
    }
}
