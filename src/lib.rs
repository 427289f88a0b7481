//! Shopping cart library
//!
//! Provides an in-memory cart aggregate with deterministic decimal price
//! arithmetic. The cart tracks an ordered sequence of line entries and
//! answers simple derived queries (emptiness, discount eligibility,
//! undiscounted total).
//!
//! # Modules
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `item`: Cart line-entry type
//! - `cart`: Cart aggregate and discount threshold

// Public modules
pub mod numeric;
pub mod item;
pub mod cart;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::numeric::*;
    pub use crate::item::*;
    pub use crate::cart::*;
}
