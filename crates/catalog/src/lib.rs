//! Catalog domain module.
//!
//! This crate contains the product record and the display-variant rules,
//! implemented purely as deterministic domain logic (no IO, no rendering).

pub mod product;
pub mod variant;

pub use product::Product;
pub use variant::{NEW_RELEASE_WINDOW_DAYS, VariantCategory};
