//! Request and response types for the ZinariPay API.
//!
//! Field names follow the camelCase JSON used on the wire. Response types
//! default every missing field so partially populated payloads still decode.

pub mod exchange_rate;
pub mod payment_link;
pub mod transaction;
pub mod wallet;

pub use exchange_rate::{ExchangeRateRequest, ExchangeRateResponse};
pub use payment_link::{PaymentLinkRequest, PaymentLinkResponse};
pub use transaction::{
    CreateTransactionRequest, CreateTransactionResponse, Cryptocurrency, ListTransactionsRequest,
    ListTransactionsResponse, TransactionDetail, TransactionRecord, TransactionStatus,
};
pub use wallet::{Wallet, WithdrawRequest, WithdrawResponse};

/// Free-form identifiers attached to a payment (`userId`, `orderId`, ...).
///
/// The object is echoed back in webhook notifications for the payment.
pub type Details = serde_json::Map<String, serde_json::Value>;

/// Decode a field that the server may send as `null`, falling back to the
/// type's default just like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}
