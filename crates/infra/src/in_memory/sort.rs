//! Field-based sorting without reflection.
//!
//! Each searchable repository declares the fields it can sort by together with
//! a getter per field ([`SortableFields`]). Getters return a [`SortValue`] so
//! numbers, text and timestamps all order natively.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use repokit_core::repository::SortDirection;

/// A sortable attribute value.
///
/// Values of different kinds order as `Null < Bool < number < Text < DateTime`;
/// integers and floats compare numerically with each other.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(DateTime<Utc>),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
            Self::DateTime(_) => 4,
        }
    }

    /// Total order used by the sort.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::DateTime(a), Self::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SortValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

type Accessor<E> = Arc<dyn Fn(&E) -> SortValue + Send + Sync>;

/// Allow-list of sortable fields and the getter for each.
pub struct SortableFields<E> {
    fields: Vec<(&'static str, Accessor<E>)>,
}

impl<E> SortableFields<E> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a sortable field. Declaring a name twice replaces its getter.
    pub fn field<G>(mut self, name: &'static str, getter: G) -> Self
    where
        G: Fn(&E) -> SortValue + Send + Sync + 'static,
    {
        let getter: Accessor<E> = Arc::new(getter);
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = getter,
            None => self.fields.push((name, getter)),
        }
        self
    }

    /// Declared field names, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.getter(name).is_some()
    }

    fn getter(&self, name: &str) -> Option<&Accessor<E>> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, getter)| getter)
    }

    /// Stable sort of `items` by `field`.
    ///
    /// Without a field, or with a field outside the allow-list, the input order
    /// is returned unchanged. Equal keys keep their input order in both
    /// directions.
    pub fn sort(&self, items: Vec<E>, field: Option<&str>, direction: SortDirection) -> Vec<E> {
        let Some(field) = field else {
            return items;
        };
        let Some(getter) = self.getter(field) else {
            warn!(field, allowed = ?self.names(), "ignoring sort on a non-sortable field");
            return items;
        };

        let mut keyed: Vec<(SortValue, E)> = items
            .into_iter()
            .map(|item| (getter(&item), item))
            .collect();
        // slice::sort_by is stable.
        keyed.sort_by(|(a, _), (b, _)| match direction {
            SortDirection::Asc => a.compare(b),
            SortDirection::Desc => b.compare(a),
        });
        keyed.into_iter().map(|(_, item)| item).collect()
    }
}

impl<E> Default for SortableFields<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SortableFields<E> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<E> core::fmt::Debug for SortableFields<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
