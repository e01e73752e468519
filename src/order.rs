//! Order records.
//!
//! An `Order` is the snapshot submitted to the order service: the food's
//! identifying fields plus the extras list with chosen quantities. A
//! confirmation with food quantity N submits N identical snapshots sharing
//! one correlation id, so the backend can group the units of a single
//! confirmation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::menu::{Extra, Food};

/// A submitted order record, one per unit of food quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier of the ordered food.
    pub food_id: u64,
    pub name: String,
    pub description: String,
    /// Unit price of the food at confirmation time.
    pub price: f64,
    pub image_url: String,
    /// Extras with their chosen quantities.
    pub extras: Vec<Extra>,
    /// Shared by all records of one confirmation.
    pub correlation_id: String,
}

impl Order {
    /// Snapshot the current composition state into an order record with a
    /// fresh correlation id.
    pub fn snapshot(food: &Food, extras: &[Extra]) -> Self {
        Self {
            food_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            image_url: food.image_url.clone(),
            extras: extras.to_vec(),
            correlation_id: Uuid::new_v4().to_string(),
        }
    }
}
