//! Transaction request and response types.

use serde::{Deserialize, Serialize};

use super::{Details, null_as_default};

// ---------------------------------------------------------------------------
// Shared enums
// ---------------------------------------------------------------------------

/// Cryptocurrencies accepted when creating a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cryptocurrency {
    Usdt,
    Usdc,
}

impl std::fmt::Display for Cryptocurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cryptocurrency::Usdt => write!(f, "USDT"),
            Cryptocurrency::Usdc => write!(f, "USDC"),
        }
    }
}

impl std::str::FromStr for Cryptocurrency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USDT" => Ok(Cryptocurrency::Usdt),
            "USDC" => Ok(Cryptocurrency::Usdc),
            other => Err(format!("unsupported cryptocurrency: {other}")),
        }
    }
}

/// Transaction lifecycle state as reported by the server.
///
/// The client only observes these; all transitions happen server-side.
/// A status string this SDK does not know decodes as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// No payment has been made yet.
    #[serde(alias = "pending")]
    Pending,
    /// An incoming transfer was detected on-chain.
    #[serde(alias = "confirming")]
    Confirming,
    /// Paid in full and confirmed by the blockchain.
    #[serde(alias = "confirmed")]
    Confirmed,
    /// A partial payment was received.
    #[serde(alias = "incomplete")]
    Incomplete,
    /// More than the requested amount was received.
    #[serde(alias = "excess")]
    Excess,
    /// The payment window (10 minutes) expired without a payment.
    /// Funds sent to the address afterwards are lost.
    #[serde(alias = "cancelled")]
    Cancelled,
    /// The transfer failed after being broadcast.
    #[serde(alias = "failed")]
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "Pending"),
            TransactionStatus::Confirming => write!(f, "Confirming"),
            TransactionStatus::Confirmed => write!(f, "Confirmed"),
            TransactionStatus::Incomplete => write!(f, "Incomplete"),
            TransactionStatus::Excess => write!(f, "Excess"),
            TransactionStatus::Cancelled => write!(f, "Cancelled"),
            TransactionStatus::Failed => write!(f, "Failed"),
            TransactionStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// Create transaction
// ---------------------------------------------------------------------------

/// Request body for `POST /create-transaction`.
///
/// Opens a deposit address for the customer. In development mode the
/// transaction confirms on its own after a few seconds and webhooks carry
/// an extra `isFake: true` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub cryptocurrency: Cryptocurrency,
    /// Amount in the app's fiat currency, converted server-side. The server
    /// rejects anything worth $5 or less.
    pub fiat_amount: i64,
    /// Customer email that receives payment notifications.
    pub notification_email_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl CreateTransactionRequest {
    pub fn new(
        cryptocurrency: Cryptocurrency,
        fiat_amount: i64,
        notification_email_address: impl Into<String>,
    ) -> Self {
        Self {
            cryptocurrency,
            fiat_amount,
            notification_email_address: notification_email_address.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }
}

/// Server-assigned transaction returned by `POST /create-transaction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTransactionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_tax: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_fee: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency_tax: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency_fee: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_amount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: TransactionStatus,
    /// Deposit address the customer pays into.
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blockchain_confirmations: i64,
}

// ---------------------------------------------------------------------------
// Get transaction
// ---------------------------------------------------------------------------

/// Full transaction state returned by `GET /transaction/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unique_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: TransactionStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blockchain_confirmations: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_received: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange_rate: f64,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_type: String,
    pub details: Option<Details>,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_amount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_currency: String,
    /// On-chain hash, absent until a transfer is detected.
    pub blockchain_transaction_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub webhook_url_called: bool,
}

// ---------------------------------------------------------------------------
// List transactions
// ---------------------------------------------------------------------------

pub const DEFAULT_LIMIT: u32 = 50;
pub const DEFAULT_PAGE: u32 = 1;

/// Pagination for the transaction listings. Unset fields fall back to
/// [`DEFAULT_LIMIT`] and [`DEFAULT_PAGE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListTransactionsRequest {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListTransactionsRequest {
    pub fn new(limit: Option<u32>, page: Option<u32>) -> Self {
        Self { limit, page }
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Encoded `limit=..&page=..` query string with defaults applied.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("limit", &self.limit().to_string())
            .append_pair("page", &self.page().to_string())
            .finish()
    }
}

/// One page of transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListTransactionsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub last_page: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_records: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_page: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub has_more_pages: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<TransactionRecord>,
}

/// Summary row of a listed transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_amount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_received: f64,
    pub blockchain_transaction_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: TransactionStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_tax: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fiat_fee: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency_tax: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cryptocurrency_fee: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_shape() {
        let request = CreateTransactionRequest::new(Cryptocurrency::Usdt, 10, "a@b.com");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "cryptocurrency": "USDT",
                "fiatAmount": 10,
                "notificationEmailAddress": "a@b.com"
            })
        );
    }

    #[test]
    fn test_create_request_with_details() {
        let mut details = Details::new();
        details.insert("orderId".into(), json!("ord_42"));
        let request =
            CreateTransactionRequest::new(Cryptocurrency::Usdc, 7500, "a@b.com").with_details(details);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["cryptocurrency"], "USDC");
        assert_eq!(value["details"], json!({ "orderId": "ord_42" }));
    }

    #[test]
    fn test_status_decoding() {
        let status: TransactionStatus = serde_json::from_value(json!("Confirming")).unwrap();
        assert_eq!(status, TransactionStatus::Confirming);
        let status: TransactionStatus = serde_json::from_value(json!("cancelled")).unwrap();
        assert_eq!(status, TransactionStatus::Cancelled);
        let status: TransactionStatus = serde_json::from_value(json!("Refunded")).unwrap();
        assert_eq!(status, TransactionStatus::Unknown);
    }

    #[test]
    fn test_cryptocurrency_from_str() {
        assert_eq!("usdt".parse::<Cryptocurrency>(), Ok(Cryptocurrency::Usdt));
        assert_eq!("USDC".parse::<Cryptocurrency>(), Ok(Cryptocurrency::Usdc));
        assert!("BTC".parse::<Cryptocurrency>().is_err());
    }

    #[test]
    fn test_list_defaults() {
        let request = ListTransactionsRequest::default();
        assert_eq!(request.to_query_string(), "limit=50&page=1");

        let request = ListTransactionsRequest::new(Some(10), None);
        assert_eq!(request.to_query_string(), "limit=10&page=1");
    }

    #[test]
    fn test_missing_fields_default() {
        let detail: TransactionDetail = serde_json::from_value(json!({ "id": "tx_1" })).unwrap();
        assert_eq!(detail.id, "tx_1");
        assert_eq!(detail.status, TransactionStatus::Unknown);
        assert!(detail.details.is_none());

        let detail: TransactionDetail = serde_json::from_value(json!({
            "id": "tx_2",
            "status": "Pending",
            "details": null,
            "blockchainTransactionId": null
        }))
        .unwrap();
        assert_eq!(detail.status, TransactionStatus::Pending);
        assert!(detail.blockchain_transaction_id.is_none());
    }

    #[test]
    fn test_null_fields_default() {
        let record: TransactionRecord = serde_json::from_value(json!({
            "id": "tx_3",
            "type": null,
            "status": null,
            "amountReceived": null,
            "fiatTax": null,
            "fiatCurrency": null
        }))
        .unwrap();
        assert_eq!(record.id, "tx_3");
        assert_eq!(record.transaction_type, "");
        assert_eq!(record.status, TransactionStatus::Unknown);
        assert_eq!(record.amount_received, 0.0);
        assert_eq!(record.fiat_tax, 0);
        assert_eq!(record.fiat_currency, "");

        let page: ListTransactionsResponse =
            serde_json::from_value(json!({ "data": null, "hasMorePages": null })).unwrap();
        assert!(page.data.is_empty());
        assert!(!page.has_more_pages);
    }
}
