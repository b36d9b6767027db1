use async_trait::async_trait;
use contracts::orders::history::{ApiErrorBody, OrderHistoryItem};
use gloo_net::http::Request;

use super::error::OrderHistoryError;
use crate::system::auth::storage::AuthRecordSource;
use crate::system::auth::token::resolve_token;

/// Source of the buyer's order history
#[async_trait(?Send)]
pub trait OrderHistoryApi {
    async fn fetch_history(&self, token: &str) -> Result<Vec<OrderHistoryItem>, OrderHistoryError>;
}

/// `GET {base_url}/orders/history` over the browser fetch API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOrderHistoryApi {
    base_url: String,
}

impl HttpOrderHistoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn history_url(&self) -> String {
        format!("{}/orders/history", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait(?Send)]
impl OrderHistoryApi for HttpOrderHistoryApi {
    async fn fetch_history(&self, token: &str) -> Result<Vec<OrderHistoryItem>, OrderHistoryError> {
        // The backend expects the raw token, not a "Bearer ..." scheme
        let response = Request::get(&self.history_url())
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| OrderHistoryError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OrderHistoryError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(server_error(status, &body));
        }

        decode_history(&body)
    }
}

/// Success body: a JSON array, `null`, or nothing at all
pub fn decode_history(body: &str) -> Result<Vec<OrderHistoryItem>, OrderHistoryError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Option<Vec<OrderHistoryItem>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| OrderHistoryError::Decode(e.to_string()))
}

/// Non-2xx response, keeping the backend's `error` text when it sent one
pub fn server_error(status: u16, body: &str) -> OrderHistoryError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error);
    OrderHistoryError::Server { status, message }
}

/// Resolve the token and fetch. No request is sent without a token.
pub async fn fetch_order_history<A, S>(
    api: &A,
    source: &S,
) -> Result<Vec<OrderHistoryItem>, OrderHistoryError>
where
    A: OrderHistoryApi + ?Sized,
    S: AuthRecordSource + ?Sized,
{
    let token = resolve_token(source)?;
    api.fetch_history(&token).await
}
