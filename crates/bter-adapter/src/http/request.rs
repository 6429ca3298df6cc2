/*
[INPUT]:  Endpoint names, ordered parameters and request signer
[OUTPUT]: Request descriptors (URL, method, headers, body) ready to execute
[POS]:    HTTP layer - request construction for public and private endpoints
[UPDATE]: When URL layout, headers or form encoding change
*/

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;

use crate::http::Result;
use crate::http::signature::RequestSigner;

pub const HEADER_SIGN: &str = "SIGN";
pub const HEADER_KEY: &str = "KEY";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped
const FORM_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Ordered form parameters.
///
/// Encoding follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams(Vec<(String, String)>);

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`FormParams::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Replace the value of an existing key in place, or append a new pair
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some(pair) => pair.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical `key=value&...` encoding in insertion order
    pub fn encode(&self) -> String {
        encode_form(&self.0)
    }
}

impl<K, V> FromIterator<(K, V)> for FormParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = FormParams::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

/// Encode pairs as `key=value` joined by `&`.
///
/// Keys and values are UTF-8 percent-encoded with uppercase hex. Spaces
/// become `%20`; `! ~ * ' ( )` are left as-is.
pub fn encode_form(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn escape(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_ESCAPE).to_string()
}

/// Fully described HTTP request, built fresh for every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builds descriptors against the configured base URLs
#[derive(Debug, Clone)]
pub struct RequestFactory {
    private_url: String,
    public_url: String,
    signer: RequestSigner,
}

impl RequestFactory {
    pub fn new(
        private_url: impl Into<String>,
        public_url: impl Into<String>,
        signer: RequestSigner,
    ) -> Self {
        Self {
            private_url: private_url.into(),
            public_url: public_url.into(),
            signer,
        }
    }

    pub fn private_url(&self) -> &str {
        &self.private_url
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// POST `{private_url}/{method}` with a signed form body
    pub fn build_authenticated(
        &self,
        method: &str,
        params: FormParams,
    ) -> Result<RequestDescriptor> {
        let payload = self.signer.sign_params(params)?;

        Ok(RequestDescriptor {
            method: Method::POST,
            url: format!("{}/{}", self.private_url, method),
            headers: vec![
                (HEADER_SIGN.to_string(), payload.signature),
                (HEADER_KEY.to_string(), payload.api_key),
                (
                    HEADER_CONTENT_TYPE.to_string(),
                    FORM_CONTENT_TYPE.to_string(),
                ),
            ],
            body: Some(payload.body),
        })
    }

    /// GET `{public_url}/{method}[/{path_suffix}]`
    pub fn build_public(&self, method: &str, path_suffix: &str) -> RequestDescriptor {
        let url = if path_suffix.is_empty() {
            format!("{}/{}", self.public_url, method)
        } else {
            format!("{}/{}/{}", self.public_url, method, path_suffix)
        };

        RequestDescriptor {
            method: Method::GET,
            url,
            headers: Vec::new(),
            body: None,
        }
    }
}
