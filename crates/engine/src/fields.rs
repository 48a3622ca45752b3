//! Field selection parsing.
//!
//! A selection is the list of field names a caller asked for, e.g.
//! `title,expenses.amount`. Names are trimmed and lower-cased, empty tokens
//! and duplicates are dropped, request order is preserved.

/// Normalized set of requested field names. Empty means "no shaping".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSelection(Vec<String>);

impl FieldSelection {
    /// Parse a raw comma-separated `fields` parameter.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.map(|raw| Self::from_fields(raw.split(',')))
            .unwrap_or_default()
    }

    /// Build a selection from individual names, normalizing each one.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for field in fields {
            let field = field.as_ref().trim().to_lowercase();
            if field.is_empty() || out.contains(&field) {
                continue;
            }
            out.push(field);
        }
        Self(out)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True if any requested name is the collection itself or one of its
    /// dotted sub-fields (`expenses`, `expenses.amount`).
    pub fn wants_collection(&self, collection: &str) -> bool {
        let collection = collection.to_lowercase();
        self.iter()
            .any(|field| references_collection(field, &collection))
    }
}

/// Matches `collection` and `collection.<anything>`.
pub(crate) fn references_collection(field: &str, collection: &str) -> bool {
    sub_field(field, collection).is_some() || field == collection
}

/// The part after `collection.`, if `field` is a dotted sub-field.
pub(crate) fn sub_field<'f>(field: &'f str, collection: &str) -> Option<&'f str> {
    field.strip_prefix(collection)?.strip_prefix('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_means_no_shaping() {
        assert!(FieldSelection::parse(None).is_empty());
        assert!(FieldSelection::parse(Some("")).is_empty());
        assert!(FieldSelection::parse(Some(" , ,")).is_empty());
    }

    #[test]
    fn normalizes_and_dedups_in_request_order() {
        let fields = FieldSelection::parse(Some(" Title ,id,,TITLE,Expenses.Amount"));
        assert_eq!(
            fields.iter().collect::<Vec<_>>(),
            vec!["title", "id", "expenses.amount"]
        );
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn detects_collection_references() {
        assert!(FieldSelection::parse(Some("id,expenses")).wants_collection("expenses"));
        assert!(FieldSelection::parse(Some("expenses.amount")).wants_collection("expenses"));
        assert!(FieldSelection::parse(Some("EXPENSES.id")).wants_collection("Expenses"));
        assert!(!FieldSelection::parse(Some("id,title")).wants_collection("expenses"));
        assert!(!FieldSelection::parse(None).wants_collection("expenses"));
        assert!(FieldSelection::parse(Some("expenses.")).wants_collection("expenses"));
        assert!(!FieldSelection::parse(Some("expensesx")).wants_collection("expenses"));
    }

    #[test]
    fn sub_field_strips_prefix() {
        assert_eq!(sub_field("expenses.amount", "expenses"), Some("amount"));
        assert_eq!(sub_field("expenses", "expenses"), None);
        assert_eq!(sub_field("expensesamount", "expenses"), None);
    }
}
