//! Uuid-backed identifiers.
//!
//! Identifiers are value objects: constructing one from text validates the
//! format eagerly and never yields a half-built value.

use uuid::{Uuid, Variant};

use crate::error::{DomainError, DomainResult};

/// Length of the canonical hyphenated form (`8-4-4-4-12`).
const HYPHENATED_LEN: usize = 36;

/// Parse the canonical hyphenated textual form of a UUID.
///
/// Simple, braced and URN encodings are rejected: stored identifiers always use
/// the hyphenated form. The value must carry a version in `1..=8` and the
/// RFC 4122 variant; the nil and max UUIDs are the only exceptions.
pub fn parse_uuid(input: &str) -> DomainResult<Uuid> {
    if input.len() != HYPHENATED_LEN {
        return Err(DomainError::invalid_id(input));
    }
    let uuid = Uuid::try_parse(input).map_err(|_| DomainError::invalid_id(input))?;
    if is_well_formed(&uuid) {
        Ok(uuid)
    } else {
        Err(DomainError::invalid_id(input))
    }
}

fn is_well_formed(uuid: &Uuid) -> bool {
    if uuid.is_nil() || uuid.as_u128() == u128::MAX {
        return true;
    }
    (1..=8usize).contains(&uuid.get_version_num()) && uuid.get_variant() == Variant::RFC4122
}

/// Declare a uuid-backed identifier type.
///
/// The generated type is a [`ValueObject`](crate::ValueObject) with:
/// - `new()` / `Default`: a fresh random (v4) identifier
/// - `parse(&str)`, `FromStr`, `TryFrom<&str>`, `TryFrom<String>`: validated construction
/// - `Display` and serde as the hyphenated string (deserialization validates)
///
/// ```
/// repokit_core::uuid_identifier! {
///     /// Identifier of an order.
///     pub struct OrderId;
/// }
///
/// let id = OrderId::new();
/// assert_eq!(OrderId::parse(&id.to_string()).unwrap(), id);
/// assert!(OrderId::parse("nope").is_err());
/// ```
#[macro_export]
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $vis:vis struct $t:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $t($crate::__private::uuid::Uuid);

        impl $t {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self($crate::__private::uuid::Uuid::new_v4())
            }

            /// Validate and wrap the hyphenated textual form.
            pub fn parse(input: &str) -> $crate::DomainResult<Self> {
                $crate::id::parse_uuid(input).map(Self)
            }

            pub fn from_uuid(uuid: $crate::__private::uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &$crate::__private::uuid::Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$crate::__private::uuid::Uuid> for $t {
            fn from(value: $crate::__private::uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $crate::__private::uuid::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<String> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl $crate::__private::serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}

uuid_identifier! {
    /// General-purpose entity identifier.
    pub struct EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueObject;

    #[test]
    fn new_generates_valid_distinct_ids() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
        assert!(EntityId::parse(&a.to_string()).is_ok());
    }

    #[test]
    fn accepts_hyphenated_uuid() {
        let raw = "5490020a-e866-4229-9adc-aa44b83234c4";
        let id = EntityId::parse(raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in [
            "",
            "invalid-uuid",
            "5490020ae86642299adcaa44b83234c4",
            "{5490020a-e866-4229-9adc-aa44b83234c4}",
            "5490020a-e866-4229-9adc-aa44b83234cz",
            "5490020a-e866-0229-0adc-aa44b83234c4",
            "5490020a-e866-9229-9adc-aa44b83234c4",
            "5490020a-e866-4229-cadc-aa44b83234c4",
        ] {
            let err = EntityId::parse(raw).unwrap_err();
            assert_eq!(err, DomainError::invalid_id(raw));
        }
    }

    #[test]
    fn accepts_nil_and_max_uuids() {
        for raw in [
            "00000000-0000-0000-0000-000000000000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
            "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF",
        ] {
            assert!(EntityId::parse(raw).is_ok(), "{raw} should parse");
        }
    }

    #[test]
    fn accepts_every_rfc_version() {
        for version in 1..=8 {
            let raw = format!("5490020a-e866-{version}229-9adc-aa44b83234c4");
            assert!(EntityId::parse(&raw).is_ok(), "{raw} should parse");
        }
    }

    #[test]
    fn ids_compare_by_value() {
        let raw = "5490020a-e866-4229-9adc-aa44b83234c4";
        let a: EntityId = raw.parse().unwrap();
        let b = EntityId::try_from(raw).unwrap();
        assert!(a.equals(Some(&b)));
        assert!(!a.equals(Some(&EntityId::new())));
    }

    #[test]
    fn serde_round_trips_through_validated_string() {
        let id = EntityId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<EntityId>(&json).unwrap(), id);
        assert!(serde_json::from_str::<EntityId>("\"abc\"").is_err());
    }
}
