//! Exchange rate lookup.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A currency pair to quote, e.g. `USD` → `NGN`.
///
/// Sent as the `from` and `to` query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeRateRequest {
    pub from: String,
    pub to: String,
}

impl ExchangeRateRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Encoded `from=..&to=..` query string.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("from", &self.from)
            .append_pair("to", &self.to)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRateResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        let request = ExchangeRateRequest::new("USD", "NGN");
        assert_eq!(request.to_query_string(), "from=USD&to=NGN");
    }

    #[test]
    fn test_query_string_is_encoded() {
        let request = ExchangeRateRequest::new("US D", "N&N");
        assert_eq!(request.to_query_string(), "from=US+D&to=N%26N");
    }
}
