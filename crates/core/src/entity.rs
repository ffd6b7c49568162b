//! Entity trait: identity that survives changes to the rest of the record.

/// Entity marker + minimal interface.
///
/// Catalogue entries are identified by a natural key (the display name) rather
/// than a generated id, so `Id` is usually a borrowed string type.
pub trait Entity {
    /// Identifier type.
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
