//! Mock collaborators for testing.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    FoodLookup, LookupError, LookupResult, OrderGateway, SubmissionError, SubmissionResult,
};
use crate::menu::Food;
use crate::order::Order;

/// Mock food-lookup and order-submission service for testing.
///
/// Serves foods from an in-memory catalog and records submitted orders.
/// Failure toggles simulate an unreachable backend or a submission that
/// fails partway through a confirmation.
pub struct MockApi {
    foods: Vec<Food>,
    fail_lookup: RwLock<bool>,
    fail_submission_at: RwLock<Option<usize>>,
    calls: RwLock<usize>,
    submitted: RwLock<Vec<Order>>,
}

impl MockApi {
    pub fn new(foods: Vec<Food>) -> Self {
        Self {
            foods,
            fail_lookup: RwLock::new(false),
            fail_submission_at: RwLock::new(None),
            calls: RwLock::new(0),
            submitted: RwLock::new(Vec::new()),
        }
    }

    /// Make every lookup fail as unreachable.
    pub async fn set_fail_lookup(&self, fail: bool) {
        *self.fail_lookup.write().await = fail;
    }

    /// Fail the submission call with the given zero-based index.
    ///
    /// The index counts every call since construction, including the
    /// failed one.
    pub async fn set_fail_submission_at(&self, index: usize) {
        *self.fail_submission_at.write().await = Some(index);
    }

    /// Clear all failure toggles.
    pub async fn clear_failures(&self) {
        *self.fail_lookup.write().await = false;
        *self.fail_submission_at.write().await = None;
    }

    /// Total submission calls received, accepted or not.
    pub async fn submission_calls(&self) -> usize {
        *self.calls.read().await
    }

    /// Orders accepted so far, in submission order.
    pub async fn submitted(&self) -> Vec<Order> {
        self.submitted.read().await.clone()
    }

    /// Number of orders accepted.
    pub async fn accepted_count(&self) -> usize {
        self.submitted.read().await.len()
    }
}

#[async_trait]
impl FoodLookup for MockApi {
    async fn fetch_food(&self, food_id: u64) -> LookupResult<Food> {
        if *self.fail_lookup.read().await {
            return Err(LookupError::Unavailable(
                "mock lookup failure".to_string(),
            ));
        }

        self.foods
            .iter()
            .find(|f| f.id == food_id)
            .cloned()
            .ok_or(LookupError::NotFound(food_id))
    }
}

#[async_trait]
impl OrderGateway for MockApi {
    async fn submit_order(&self, order: &Order) -> SubmissionResult<()> {
        let call = {
            let mut calls = self.calls.write().await;
            let current = *calls;
            *calls += 1;
            current
        };

        if *self.fail_submission_at.read().await == Some(call) {
            return Err(SubmissionError::Unavailable(
                "mock submission failure".to_string(),
            ));
        }

        self.submitted.write().await.push(order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Extra;

    fn make_food(id: u64) -> Food {
        Food {
            id,
            name: "Veggie".to_string(),
            description: "Legumes no vapor".to_string(),
            price: 21.0,
            image_url: "https://example.com/veggie.png".to_string(),
            extras: vec![Extra {
                id: 1,
                name: "Bacon".to_string(),
                value: 1.5,
                quantity: 0,
            }],
        }
    }

    fn make_order(food: &Food) -> Order {
        Order::snapshot(food, &food.extras)
    }

    #[tokio::test]
    async fn test_fetch_food_from_catalog() {
        let api = MockApi::new(vec![make_food(1), make_food(2)]);

        let food = api.fetch_food(2).await.unwrap();
        assert_eq!(food.id, 2);
    }

    #[tokio::test]
    async fn test_fetch_food_not_found() {
        let api = MockApi::new(vec![make_food(1)]);

        let result = api.fetch_food(9).await;
        assert!(matches!(result, Err(LookupError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_fetch_food_fail_toggle() {
        let api = MockApi::new(vec![make_food(1)]);
        api.set_fail_lookup(true).await;

        let result = api.fetch_food(1).await;
        assert!(matches!(result, Err(LookupError::Unavailable(_))));

        api.clear_failures().await;
        assert!(api.fetch_food(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_order_records_in_order() {
        let api = MockApi::new(vec![]);
        let food = make_food(1);

        api.submit_order(&make_order(&food)).await.unwrap();
        api.submit_order(&make_order(&food)).await.unwrap();

        assert_eq!(api.accepted_count().await, 2);
        assert_eq!(api.submission_calls().await, 2);
    }

    #[tokio::test]
    async fn test_fail_submission_at_index() {
        let api = MockApi::new(vec![]);
        let food = make_food(1);
        api.set_fail_submission_at(1).await;

        assert!(api.submit_order(&make_order(&food)).await.is_ok());
        let result = api.submit_order(&make_order(&food)).await;
        assert!(matches!(result, Err(SubmissionError::Unavailable(_))));

        // Only the accepted call is recorded, both are counted.
        assert_eq!(api.accepted_count().await, 1);
        assert_eq!(api.submission_calls().await, 2);
    }
}
