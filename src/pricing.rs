//! Total price derivation.
//!
//! The total is a pure function of the composition state. It is recomputed
//! from scratch on every change; nothing stores a total that could drift
//! out of sync with the quantities.

use crate::menu::Extra;

/// Derive the order total from the food's unit price, the chosen food
/// quantity, and the working extras list.
///
/// `total = price * food_quantity + Σ(extra.value * extra.quantity)`
pub fn order_total(price: f64, food_quantity: u32, extras: &[Extra]) -> f64 {
    let extras_total: f64 = extras.iter().map(Extra::subtotal).sum();
    price * f64::from(food_quantity) + extras_total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_extra(value: f64, quantity: u32) -> Extra {
        Extra {
            id: 1,
            name: "Bacon".to_string(),
            value,
            quantity,
        }
    }

    #[test]
    fn test_total_without_extras() {
        assert_eq!(order_total(10.0, 2, &[]), 20.0);
    }

    #[test]
    fn test_zero_quantity_extras_contribute_nothing() {
        let extras = vec![make_extra(1.5, 0), make_extra(2.0, 0)];
        assert_eq!(order_total(10.0, 1, &extras), 10.0);
    }

    #[test]
    fn test_total_combines_food_and_extras() {
        // price 10.00, one extra at 2.00 taken twice, food quantity 3
        let extras = vec![make_extra(2.0, 2)];
        assert_eq!(order_total(10.0, 3, &extras), 34.0);
    }

    #[test]
    fn test_total_sums_multiple_extras() {
        let extras = vec![make_extra(1.5, 2), make_extra(2.0, 1)];
        assert_eq!(order_total(8.0, 1, &extras), 13.0);
    }
}
