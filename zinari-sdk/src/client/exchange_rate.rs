use super::{ClientError, ZinariClient};
use crate::objects::exchange_rate::{ExchangeRateRequest, ExchangeRateResponse};

impl ZinariClient {
    /// `GET /exchange-rate?from=..&to=..` – current rate for a currency pair.
    pub async fn get_exchange_rate(
        &self,
        request: &ExchangeRateRequest,
    ) -> Result<ExchangeRateResponse, ClientError> {
        self.get(&format!("/exchange-rate?{}", request.to_query_string()))
            .await
    }
}
