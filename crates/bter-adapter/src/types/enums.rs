/*
[INPUT]:  Exchange order side strings
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::BterError;

/// Value of the `order_type` field of `placeorder`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Buy => "buy",
            OrderType::Sell => "sell",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = BterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderType::Buy),
            "sell" => Ok(OrderType::Sell),
            other => Err(BterError::InvalidParameter(format!(
                "unknown order type '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ErrorKind;

    #[test]
    fn test_order_type_strings() {
        assert_eq!(OrderType::Buy.to_string(), "buy");
        assert_eq!(OrderType::Sell.to_string(), "sell");
        assert_eq!("SELL".parse::<OrderType>().unwrap(), OrderType::Sell);
    }

    #[test]
    fn test_unknown_order_type_is_invalid_parameter() {
        let err = "hold".parse::<OrderType>().unwrap_err();
        assert!(matches!(err, BterError::InvalidParameter(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(err.is_local());
    }

    #[test]
    fn test_order_type_serde() {
        assert_eq!(serde_json::to_string(&OrderType::Buy).unwrap(), r#""buy""#);
        let parsed: OrderType = serde_json::from_str(r#""sell""#).unwrap();
        assert_eq!(parsed, OrderType::Sell);
    }
}
