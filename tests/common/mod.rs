//! Shared helpers for integration tests.

use platter::menu::{Extra, Food};

/// Initialize tracing once for the test binary.
pub fn init_tracing() {
    platter::bootstrap::init_tracing();
}

pub fn make_extra(id: u64, name: &str, value: f64) -> Extra {
    Extra {
        id,
        name: name.to_string(),
        value,
        quantity: 0,
    }
}

/// A small menu with exactly-representable prices so totals compare
/// bit-for-bit.
pub fn make_catalog() -> Vec<Food> {
    vec![
        Food {
            id: 1,
            name: "Ao molho".to_string(),
            description: "Macarrao com molho branco".to_string(),
            price: 10.0,
            image_url: "https://example.com/ao_molho.png".to_string(),
            extras: vec![
                make_extra(1, "Bacon", 1.5),
                make_extra(2, "Frango", 2.0),
                make_extra(3, "Queijo", 0.5),
            ],
        },
        Food {
            id: 2,
            name: "Veggie".to_string(),
            description: "Legumes no vapor".to_string(),
            price: 21.0,
            image_url: "https://example.com/veggie.png".to_string(),
            extras: vec![],
        },
    ]
}
