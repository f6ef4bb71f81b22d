//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Identifiers are the most common example in this crate.

/// Trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Equality is the
/// derived, attribute-wise `PartialEq`, which already recurses into nested
/// value objects, compares sequences element by element in order and maps key
/// by key. Comparing two different concrete types does not type-check, so
/// "same variant" is enforced by the compiler.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with the same values are equal)
/// - **Entity**: identity (two entities with the same id are the same entity,
///   whatever their other attributes)
///
/// ## Usage
///
/// ```
/// use repokit_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let a = Money { amount: 100, currency: "USD".into() };
/// let b = Money { amount: 100, currency: "USD".into() };
/// assert!(a.equals(Some(&b)));
/// assert!(!a.equals(None));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Structural equality against a possibly absent value.
    ///
    /// An absent value is never equal.
    fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }
}
