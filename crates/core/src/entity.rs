//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products, pricing groups and currencies are entities: two records with the
/// same id describe the same thing, even if other attributes differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
