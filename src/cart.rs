//! Cart aggregate
//!
//! Maintains an ordered sequence of line entries. Insertion order is
//! preserved, duplicates are allowed, and removal matches the first
//! structurally-equal entry. Every operation is total: nothing here fails.

use crate::item::CartItem;
use crate::numeric::Price;
use serde::{Deserialize, Serialize};

/// Minimum number of line entries required for discount eligibility
///
/// Compared against the entry count, not the summed unit quantity.
pub const DISCOUNT_THRESHOLD: usize = 5;

/// An in-memory shopping cart
///
/// Created empty; owned by the caller's scope. Single-threaded use is
/// assumed; sharing across threads requires external synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Line entries in insertion order
    items: Vec<CartItem>,
}

impl Cart {
    /// Create a new empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end of the cart
    ///
    /// Always succeeds; no constraints are placed on the item.
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove the first entry structurally equal to `item`
    ///
    /// Returns true if an entry was removed, false if no match was found.
    /// Absence is not an error; the cart is left unchanged.
    pub fn remove_item(&mut self, item: &CartItem) -> bool {
        match self.items.iter().position(|entry| entry == item) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    /// Check if the cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of line entries
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart qualifies for a discount
    ///
    /// True iff the entry count is at least [`DISCOUNT_THRESHOLD`].
    pub fn is_discount_eligible(&self) -> bool {
        self.items.len() >= DISCOUNT_THRESHOLD
    }

    /// Sum of unit price × quantity over all entries, with no discount applied
    ///
    /// Returns the zero price for an empty cart.
    pub fn total_price_without_discount(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// View the entries in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
