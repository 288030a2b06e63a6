//! Inventory domain logic.
//!
//! Product types and the product validator. Nothing in this crate performs
//! I/O, so every rule can be exercised without a database.

pub mod error;
pub mod product;
pub mod types;
