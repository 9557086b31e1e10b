//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`Price { without_vat: 100, with_vat: 121 }`)
/// - **Entity**: Has identity (`Product { id: ProductId(...), .. }`)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Vat {
///     percent: Decimal,
/// }
///
/// impl ValueObject for Vat {}
///
/// assert_eq!(Vat { percent: dec!(21) }, Vat { percent: dec!(21) });
/// ```
///
/// Calculation results (prices) are value objects too: they are produced fresh
/// on every call and never mutated afterwards.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
