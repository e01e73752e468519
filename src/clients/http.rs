//! HTTP implementations of the collaborator interfaces.
//!
//! Talks JSON to the backend: `GET {base}/foods/{id}` for lookup and
//! `POST {base}/orders` for submission. Timeouts come from configuration;
//! there is no retry here, the session's caller decides whether to repeat
//! a failed operation.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use super::{
    FoodLookup, LookupError, LookupResult, OrderGateway, SubmissionError, SubmissionResult,
};
use crate::config::ApiConfig;
use crate::menu::Food;
use crate::order::Order;

/// HTTP client for the food-lookup and order-submission endpoints.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn food_url(&self, food_id: u64) -> String {
        format!("{}/foods/{}", self.base_url, food_id)
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    /// Determine if an HTTP status means the service itself is struggling.
    fn is_unavailable_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }
}

/// Truncate a response body for error messages.
fn body_snippet(body: &str) -> String {
    body.chars().take(200).collect()
}

#[async_trait]
impl FoodLookup for HttpApi {
    async fn fetch_food(&self, food_id: u64) -> LookupResult<Food> {
        let url = self.food_url(food_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(food_id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(url = %url, status = %status, "Food lookup failed");
            return Err(LookupError::Unavailable(format!(
                "HTTP {} - {}",
                status,
                body_snippet(&body)
            )));
        }

        let food: Food = response.json().await?;
        debug!(
            food.id = food.id,
            extras = food.extras.len(),
            "Fetched food"
        );
        Ok(food)
    }
}

#[async_trait]
impl OrderGateway for HttpApi {
    async fn submit_order(&self, order: &Order) -> SubmissionResult<()> {
        let response = self
            .client
            .post(self.orders_url())
            .json(order)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(
                food.id = order.food_id,
                correlation_id = %order.correlation_id,
                "Order accepted"
            );
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!(
            food.id = order.food_id,
            status = %status,
            "Order submission failed"
        );

        let detail = format!("HTTP {} - {}", status, body_snippet(&body));
        if Self::is_unavailable_status(status) {
            Err(SubmissionError::Unavailable(detail))
        } else {
            Err(SubmissionError::Rejected(detail))
        }
    }
}
