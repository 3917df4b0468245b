//! Wallet balance and withdrawal types.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// An app wallet holding the balance for one currency.
///
/// The `id` is what withdrawals are addressed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
}

/// Request body for `POST /withdraw/{wallet_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    /// Destination address on the wallet's chain.
    pub address: String,
    pub amount: f64,
}

impl WithdrawRequest {
    pub fn new(address: impl Into<String>, amount: f64) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// Wallet state after a withdrawal was accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub balance: f64,
}
