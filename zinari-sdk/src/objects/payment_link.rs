//! Hosted payment link ("paylink") types.
//!
//! A paylink sends the customer to a checkout page hosted by ZinariPay,
//! which walks them through the payment and redirects back to the app.

use serde::{Deserialize, Serialize};

use super::Details;

/// Request body for `POST /paylink`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkRequest {
    /// Fiat amount in the app's configured currency.
    pub fiat_amount: i64,
    /// Customer email; ZinariPay sends payment notifications here.
    pub notification_email_address: String,
    /// Identifiers echoed back in webhook payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
    /// Where the customer lands after a successful payment. Falls back to
    /// the URI configured in the ZinariPay console when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_redirect_uri: Option<String>,
    /// Where the customer lands after a failed payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_redirect_uri: Option<String>,
}

impl PaymentLinkRequest {
    pub fn new(fiat_amount: i64, notification_email_address: impl Into<String>) -> Self {
        Self {
            fiat_amount,
            notification_email_address: notification_email_address.into(),
            details: None,
            success_redirect_uri: None,
            failure_redirect_uri: None,
        }
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_success_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.success_redirect_uri = Some(uri.into());
        self
    }

    pub fn with_failure_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.failure_redirect_uri = Some(uri.into());
        self
    }
}

/// The paylink response is an open JSON object.
pub type PaymentLinkResponse = serde_json::Map<String, serde_json::Value>;
