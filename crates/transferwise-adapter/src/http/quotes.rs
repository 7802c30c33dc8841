/*
[INPUT]:  Quote requests and quote ids
[OUTPUT]: Provider-computed quotes and pay-in methods
[POS]:    HTTP layer - quote endpoints
[UPDATE]: When adding new quote endpoints or changing quote fields
*/

use rust_decimal::Decimal;

use crate::http::{Result, TransferwiseClient};
use crate::types::{PayInMethod, QuoteRequest, QuoteResponse, TemporaryQuoteRequest};
use reqwest::Method;

const QUOTES_PATH: &str = "v1/quotes";

impl TransferwiseClient {
    /// Submit a quote request built from a profile
    ///
    /// POST v1/quotes
    pub async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        self.execute(Method::POST, QUOTES_PATH, Some(request), &[])
            .await
    }

    /// GET v1/quotes/{id}
    pub async fn quote_by_id(&self, id: i64) -> Result<QuoteResponse> {
        self.get_json(&format!("{QUOTES_PATH}/{id}")).await
    }

    /// GET v1/quotes/{id}/pay-in-methods
    pub async fn pay_in_methods(&self, quote_id: i64) -> Result<Vec<PayInMethod>> {
        self.get_json(&format!("{QUOTES_PATH}/{quote_id}/pay-in-methods"))
            .await
    }

    /// Indicative quote not tied to any profile
    ///
    /// GET v1/quotes, with the request as a JSON body on the GET
    pub async fn temporary_quote(
        &self,
        source: &str,
        target: &str,
        target_amount: Option<Decimal>,
        source_amount: Option<Decimal>,
    ) -> Result<QuoteResponse> {
        let request = TemporaryQuoteRequest::new(source, target, target_amount, source_amount)?;
        self.execute(Method::GET, QUOTES_PATH, Some(&request), &[])
            .await
    }
}
