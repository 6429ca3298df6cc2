/*
[INPUT]:  Transport outcome (status code and raw body, or transport error)
[OUTPUT]: Parsed JSON value or a classified BterError
[POS]:    HTTP layer - single response policy for every endpoint
[UPDATE]: When exchange error conventions change
*/

use serde_json::Value;

use crate::http::{BterError, Result};

/// Status and body as returned by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Turn a transport outcome into the call result.
///
/// Checked in order: transport failure or non-200 status, invalid JSON,
/// truthy `error` field. Anything else is returned as-is.
pub fn normalize(outcome: Result<RawResponse>) -> Result<Value> {
    let response = outcome?;
    if response.status != 200 {
        return Err(BterError::HttpStatus {
            status: response.status,
        });
    }

    let value: Value = serde_json::from_str(&response.body)?;

    if let Some(error) = value.get("error").filter(|e| is_truthy(e)) {
        return Err(BterError::Api {
            message: error_message(error),
        });
    }

    Ok(value)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
