//! Transaction endpoints.

use super::{ClientError, ZinariClient};
use crate::objects::transaction::{
    CreateTransactionRequest, CreateTransactionResponse, ListTransactionsRequest,
    ListTransactionsResponse, TransactionDetail,
};

impl ZinariClient {
    /// `POST /create-transaction` – open a deposit address for a payment.
    ///
    /// An unpaid transaction is cancelled by the server after 10 minutes.
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse, ClientError> {
        self.post("/create-transaction", request).await
    }

    /// `GET /transaction/{id}` – fetch or poll a single transaction.
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionDetail, ClientError> {
        self.get(&format!(
            "/transaction/{}",
            urlencoding::encode(transaction_id)
        ))
        .await
    }

    /// `GET /transactions?limit=..&page=..` – transactions created while the
    /// app was in production mode.
    pub async fn list_transactions(
        &self,
        request: &ListTransactionsRequest,
    ) -> Result<ListTransactionsResponse, ClientError> {
        self.get(&format!("/transactions?{}", request.to_query_string()))
            .await
    }

    /// `GET /transactions-dev?limit=..&page=..` – simulated transactions
    /// created while the app was in development mode.
    pub async fn list_dev_transactions(
        &self,
        request: &ListTransactionsRequest,
    ) -> Result<ListTransactionsResponse, ClientError> {
        self.get(&format!("/transactions-dev?{}", request.to_query_string()))
            .await
    }
}
