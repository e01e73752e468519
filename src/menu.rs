//! Menu data model.
//!
//! Wire types returned by the food-lookup service. A `Food` carries its
//! catalog of `Extra` add-ons; the session keeps a mutable working copy of
//! that catalog where quantities are the only thing that changes.

use serde::{Deserialize, Serialize};

/// An optional add-on item associated with a food, purchasable in integer
/// quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    /// Identifier, unique within one food's catalog.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Unit value added to the order total per unit of quantity.
    pub value: f64,
    /// User-selected quantity. The session forces this to 0 at load time
    /// regardless of what the service returned.
    #[serde(default)]
    pub quantity: u32,
}

impl Extra {
    /// Price contribution of this extra at its current quantity.
    pub fn subtotal(&self) -> f64 {
        self.value * f64::from(self.quantity)
    }
}

/// A food item as returned by the lookup service.
///
/// Immutable once loaded; a session replaces it wholesale on reload rather
/// than patching fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Unit price. Display formatting is the presentation layer's job.
    pub price: f64,
    /// Image reference; opaque to this core.
    pub image_url: String,
    /// Catalog of available extras.
    #[serde(default)]
    pub extras: Vec<Extra>,
}
