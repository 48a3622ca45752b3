//! Static per-resource schemas.
//!
//! Every resource exposes a table of its public fields (name → accessor), an
//! allow-list of sortable fields and, when it has one, its nested collection.
//! Shaping and sorting resolve caller supplied names against these tables
//! instead of inspecting types at runtime.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::{ResultEngine, fields::FieldSelection, shaping::ShapedObject};

/// A field value lifted out of an entity.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(DateTime<Utc>),
    List(Vec<FieldValue>),
    Object(ShapedObject),
}

impl FieldValue {
    /// Total order used by the sorter.
    ///
    /// Numbers compare numerically across `Int` and `Float`, text compares
    /// ordinally. Values of different kinds order by kind, `Null` first.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Text(_) => 2,
            Self::Date(_) => 3,
            Self::List(_) => 4,
            Self::Object(_) => 5,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Date(value) => value.serialize(serializer),
            Self::List(values) => serializer.collect_seq(values),
            Self::Object(object) => object.serialize(serializer),
        }
    }
}

/// One public field of `T`.
pub struct Field<T> {
    pub name: &'static str,
    pub value: fn(&T) -> FieldValue,
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// The nested collection carried by `T`.
///
/// `validate` checks a selection against the child resource, `shape` renders
/// the children of one entity with that selection.
pub struct Collection<T> {
    pub name: &'static str,
    pub validate: fn(&FieldSelection) -> ResultEngine<()>,
    pub shape: fn(&T, &FieldSelection) -> ResultEngine<FieldValue>,
}

impl<T> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection").field("name", &self.name).finish()
    }
}

/// Resource schema: public fields, sortable fields and paging defaults.
pub trait Schema: Serialize + Sized + 'static {
    /// Resource name used in error messages.
    const RESOURCE: &'static str;
    /// Sort applied when the caller supplies none.
    const DEFAULT_SORT: &'static str;
    const DEFAULT_PAGE_SIZE: u32;
    const MAX_PAGE_SIZE: u32;

    /// Public fields, in serialization order.
    fn fields() -> &'static [Field<Self>];

    /// Allow-list of sortable field names.
    fn sortable() -> &'static [&'static str];

    fn collection() -> Option<&'static Collection<Self>> {
        None
    }

    /// Case-insensitive lookup of a public field.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::fields()
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_kinds() {
        assert_eq!(
            FieldValue::Int(4).sort_cmp(&FieldValue::Float(12.5)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Float(4.0).sort_cmp(&FieldValue::Int(4)),
            Ordering::Equal
        );
    }

    #[test]
    fn null_sorts_first() {
        assert_eq!(
            FieldValue::Null.sort_cmp(&FieldValue::from("a")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::from(Some("a")).sort_cmp(&FieldValue::from(None::<&str>)),
            Ordering::Greater
        );
    }

    #[test]
    fn serializes_as_plain_json() {
        let value = FieldValue::List(vec![
            FieldValue::Int(1),
            FieldValue::Null,
            FieldValue::from("x"),
        ]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            serde_json::json!([1, null, "x"])
        );
    }
}
