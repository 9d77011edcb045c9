//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — identity
/// doesn't matter, only the attribute values do. `Money { amount: 100,
/// currency: Usd }` equals any other money with the same amount and
/// currency; a `Product` is the same product only if its slug matches.
///
/// To "modify" a value object, create a new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
