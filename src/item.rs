//! Cart line-entry type
//!
//! A `CartItem` has no identity beyond structural equality: two entries with
//! the same name, unit price, and quantity are interchangeable, and removal
//! from a cart matches on all three fields.

use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single line entry in a cart
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub unit_price: Price,
    pub quantity: Quantity,
}

impl CartItem {
    /// Create a new line entry
    ///
    /// No constraints are enforced: zero quantities and zero (or negative)
    /// prices are accepted as-is.
    pub fn new(name: impl Into<String>, unit_price: Price, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// The entry's contribution to the cart total: unit price × quantity
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

impl fmt::Display for CartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{} @ {}", self.name, self.quantity, self.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartItem::new("apple", Price::from_str("3.00").unwrap(), Quantity::new(2));
        assert_eq!(item.line_total(), Price::from_str("6.00").unwrap());
    }

    #[test]
    fn test_line_total_zero_quantity() {
        let item = CartItem::new("apple", Price::from_str("3.00").unwrap(), Quantity::zero());
        assert!(item.line_total().is_zero());
    }

    #[test]
    fn test_structural_equality() {
        let a = CartItem::new("apple", Price::from_u64(2), Quantity::new(1));
        let b = CartItem::new("apple", Price::from_u64(2), Quantity::new(1));
        let c = CartItem::new("apple", Price::from_u64(2), Quantity::new(3));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_item_serialization() {
        let item = CartItem::new("pear", Price::from_str("1.25").unwrap(), Quantity::new(4));
        let json = serde_json::to_string(&item).unwrap();
        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}
