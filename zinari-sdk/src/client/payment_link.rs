use super::{ClientError, ZinariClient};
use crate::objects::payment_link::{PaymentLinkRequest, PaymentLinkResponse};

impl ZinariClient {
    /// `POST /paylink` – generate a hosted checkout link.
    ///
    /// Redirect the customer to the returned link; ZinariPay runs the
    /// payment flow and sends them back to the success or failure URI.
    pub async fn get_payment_link(
        &self,
        request: &PaymentLinkRequest,
    ) -> Result<PaymentLinkResponse, ClientError> {
        self.post("/paylink", request).await
    }
}
