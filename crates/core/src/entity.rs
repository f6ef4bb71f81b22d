//! Entity trait: identity + continuity across state changes.

use serde::Serialize;

use crate::value_object::ValueObject;

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their identities are equal, no matter
/// how their other attributes differ. Repositories match on
/// [`Entity::entity_id`] for lookup, update and delete.
pub trait Entity: Serialize {
    /// Identity value of the entity.
    type Id: ValueObject + core::fmt::Display + Send + Sync;

    /// Returns the entity identifier.
    fn entity_id(&self) -> &Self::Id;

    /// Type name used in error messages (e.g. `"Category"`).
    ///
    /// Defaults to the unqualified Rust type name.
    fn entity_name() -> &'static str
    where
        Self: Sized,
    {
        let full = core::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Primitive (JSON) representation for persistence and inspection.
    ///
    /// Serialization failures are returned to the caller.
    fn to_primitive(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// True when `other` has the same identity.
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.entity_id().equals(Some(other.entity_id()))
    }
}
