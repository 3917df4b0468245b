//! Wallet endpoints.

use super::{ClientError, ZinariClient};
use crate::objects::wallet::{Wallet, WithdrawRequest, WithdrawResponse};

impl ZinariClient {
    /// `GET /wallets` – all app wallets with their balances.
    pub async fn get_wallets(&self) -> Result<Vec<Wallet>, ClientError> {
        self.get("/wallets").await
    }

    /// `GET /wallet/{id}` – a single wallet.
    pub async fn get_wallet(&self, wallet_id: &str) -> Result<Wallet, ClientError> {
        self.get(&format!("/wallet/{}", urlencoding::encode(wallet_id)))
            .await
    }

    /// `POST /withdraw/{id}` – withdraw `request.amount` to
    /// `request.address`.
    pub async fn withdraw_from_wallet(
        &self,
        wallet_id: &str,
        request: &WithdrawRequest,
    ) -> Result<WithdrawResponse, ClientError> {
        self.post(
            &format!("/withdraw/{}", urlencoding::encode(wallet_id)),
            request,
        )
        .await
    }
}
