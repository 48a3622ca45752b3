//! Response shaping.
//!
//! [`shape`] turns an entity into the subset of fields a caller selected.
//! A resource with a nested collection is shaped recursively:
//!
//! - `expenses.amount` alone renders every child with only `amount`;
//! - `expenses` renders every child in full, and any `expenses.*` sub-field
//!   requested next to it is ignored.
//!
//! The collection is always the last key of a shaped object.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    EngineError, ResultEngine,
    fields::{FieldSelection, sub_field},
    schema::{FieldValue, Schema},
};

/// Ordered `(name, value)` pairs of a shaped entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapedObject(Vec<(String, FieldValue)>);

impl ShapedObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every public field of `entity`, in schema order.
    pub fn full<T: Schema>(entity: &T) -> Self {
        Self(
            T::fields()
                .iter()
                .map(|field| (field.name.to_string(), (field.value)(entity)))
                .collect(),
        )
    }

    pub fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        self.0.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0
            .iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ShapedObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Output of [`shape`]: the entity itself, or the selected fields only.
#[derive(Debug, PartialEq)]
pub enum Shaped<'a, T> {
    Full(&'a T),
    Partial(ShapedObject),
}

impl<T: Schema> Shaped<'_, T> {
    /// Lift into a [`FieldValue`], used when shaping nested children.
    pub fn into_value(self) -> FieldValue {
        match self {
            Self::Full(entity) => FieldValue::Object(ShapedObject::full(entity)),
            Self::Partial(object) => FieldValue::Object(object),
        }
    }
}

impl<T: Serialize> Serialize for Shaped<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Full(entity) => entity.serialize(serializer),
            Self::Partial(object) => object.serialize(serializer),
        }
    }
}

/// A selection split by how each name relates to the nested collection.
struct Partition<'f> {
    plain: Vec<&'f str>,
    whole_collection: bool,
    nested: FieldSelection,
}

fn partition<'f, T: Schema>(fields: &'f FieldSelection) -> Partition<'f> {
    let collection = T::collection().map(|c| c.name.to_lowercase());
    let mut plain = Vec::new();
    let mut whole_collection = false;
    let mut nested = Vec::new();

    for field in fields.iter() {
        match collection.as_deref() {
            Some(name) if field == name => whole_collection = true,
            Some(name) => match sub_field(field, name) {
                // `expenses.` names no sub-field, so the whole collection.
                Some("") => whole_collection = true,
                Some(sub) => nested.push(sub),
                None => plain.push(field),
            },
            None => plain.push(field),
        }
    }

    Partition {
        plain,
        whole_collection,
        nested: FieldSelection::from_fields(nested),
    }
}

fn unknown_field<T: Schema>(field: &str) -> EngineError {
    EngineError::UnknownField {
        resource: T::RESOURCE,
        field: field.to_string(),
    }
}

/// Check that every name in `fields` exists on `T`, recursing into the
/// nested collection when only its sub-fields were requested.
pub fn validate<T: Schema>(fields: &FieldSelection) -> ResultEngine<()> {
    let parts = partition::<T>(fields);
    if let Some(field) = parts.plain.iter().find(|name| T::field(name).is_none()) {
        return Err(unknown_field::<T>(field));
    }
    if let Some(collection) = T::collection()
        && !parts.whole_collection
        && !parts.nested.is_empty()
    {
        (collection.validate)(&parts.nested)?;
    }
    Ok(())
}

/// Shape one entity according to `fields`.
pub fn shape<'a, T: Schema>(entity: &'a T, fields: &FieldSelection) -> ResultEngine<Shaped<'a, T>> {
    if fields.is_empty() {
        return Ok(Shaped::Full(entity));
    }

    let parts = partition::<T>(fields);
    let mut out = ShapedObject(Vec::with_capacity(parts.plain.len() + 1));
    for name in &parts.plain {
        let field = T::field(name).ok_or_else(|| unknown_field::<T>(name))?;
        out.push(*name, (field.value)(entity));
    }

    if let Some(collection) = T::collection() {
        if parts.whole_collection {
            let field = T::field(collection.name).ok_or_else(|| unknown_field::<T>(collection.name))?;
            out.push(collection.name.to_lowercase(), (field.value)(entity));
        } else if !parts.nested.is_empty() {
            out.push(
                collection.name.to_lowercase(),
                (collection.shape)(entity, &parts.nested)?,
            );
        }
    }

    Ok(Shaped::Partial(out))
}

/// Shape every item of a nested collection into a [`FieldValue::List`].
pub fn shape_all<T: Schema>(items: &[T], fields: &FieldSelection) -> ResultEngine<FieldValue> {
    items
        .iter()
        .map(|item| shape(item, fields).map(Shaped::into_value))
        .collect::<ResultEngine<Vec<_>>>()
        .map(FieldValue::List)
}
