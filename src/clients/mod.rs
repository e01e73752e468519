//! Collaborator interfaces.
//!
//! The composition core talks to two external services: the food-lookup
//! endpoint and the order-submission endpoint. Both are modeled as async
//! traits so the session can run against the HTTP backend or the
//! in-memory mock.

pub mod http;
pub mod mock;

use async_trait::async_trait;

use crate::menu::Food;
use crate::order::Order;

/// Result type for lookup operations.
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Result type for submission operations.
pub type SubmissionResult<T> = std::result::Result<T, SubmissionError>;

/// Errors from the food-lookup collaborator.
///
/// Terminal for the screen: the session surfaces them and stays
/// uninitialized. No retry is built in; retrying is the caller's call.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The service answered but has no food with the requested id.
    #[error("food {0} not found")]
    NotFound(u64),

    /// The service answered with a non-success status.
    #[error("lookup unavailable: {0}")]
    Unavailable(String),

    /// Transport-level failure (connection, timeout, body decode).
    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl LookupError {
    /// Returns true if the food simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

/// Errors from the order-submission collaborator.
///
/// Recoverable: the session returns to ready so the caller may repeat the
/// confirmation. Orders already accepted are not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The service refused the order (non-retryable status).
    #[error("order rejected: {0}")]
    Rejected(String),

    /// The service could not serve the request (5xx or rate limited).
    #[error("order service unavailable: {0}")]
    Unavailable(String),

    /// Transport-level failure (connection, timeout).
    #[error("submission request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl SubmissionError {
    /// Returns true if the failure is on the connection rather than a
    /// verdict on the order itself.
    pub fn is_connection_error(&self) -> bool {
        match self {
            SubmissionError::Http(e) => e.is_timeout() || e.is_connect(),
            SubmissionError::Unavailable(_) => true,
            SubmissionError::Rejected(_) => false,
        }
    }
}

/// Interface for the food-lookup service.
///
/// Implementations:
/// - `http::HttpApi`: JSON REST backend
/// - `mock::MockApi`: in-memory catalog for tests
#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// Fetch a food and its extras catalog by id.
    async fn fetch_food(&self, food_id: u64) -> LookupResult<Food>;
}

/// Interface for the order-submission service.
///
/// One call accepts exactly one order record; a confirmation with food
/// quantity N performs N sequential calls.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit one order record.
    async fn submit_order(&self, order: &Order) -> SubmissionResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_is_not_found() {
        assert!(LookupError::NotFound(3).is_not_found());
        assert!(!LookupError::Unavailable("down".to_string()).is_not_found());
    }

    #[test]
    fn test_submission_error_connection_classification() {
        assert!(SubmissionError::Unavailable("down".to_string()).is_connection_error());
        assert!(!SubmissionError::Rejected("HTTP 400".to_string()).is_connection_error());
    }

    #[test]
    fn test_error_messages_name_the_food() {
        let err = LookupError::NotFound(7);
        assert_eq!(err.to_string(), "food 7 not found");
    }
}
