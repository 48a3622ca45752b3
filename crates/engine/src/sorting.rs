//! Sorting by caller supplied specifications such as `-date,id`.

use std::cmp::Ordering;

use crate::{
    EngineError, ResultEngine,
    schema::{FieldValue, Schema},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// One resolved sort key. `field` is the canonical schema name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub dir: SortDir,
}

/// Validated multi-key ordering; the first key is the primary one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    /// Parse and validate a sort specification against `T`.
    ///
    /// A missing or blank specification falls back to `T::DEFAULT_SORT`.
    pub fn parse<T: Schema>(raw: Option<&str>) -> ResultEngine<Self> {
        let keys = match raw {
            Some(raw) => parse_keys::<T>(raw)?,
            None => Vec::new(),
        };
        if keys.is_empty() {
            return parse_keys::<T>(T::DEFAULT_SORT).map(Self);
        }
        Ok(Self(keys))
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }

    /// Stable sort of `items`; the input is left untouched.
    pub fn apply<'a, T, I>(&self, items: I) -> Vec<&'a T>
    where
        T: Schema,
        I: IntoIterator<Item = &'a T>,
    {
        let accessors: Vec<_> = self
            .0
            .iter()
            .filter_map(|key| T::field(key.field).map(|field| (field.value, key.dir)))
            .collect();

        let mut decorated: Vec<(Vec<FieldValue>, &'a T)> = items
            .into_iter()
            .map(|item| {
                let values = accessors.iter().map(|(value, _)| value(item)).collect();
                (values, item)
            })
            .collect();

        decorated.sort_by(|(a, _), (b, _)| {
            accessors
                .iter()
                .zip(a.iter().zip(b))
                .map(|((_, dir), (a, b))| match dir {
                    SortDir::Asc => a.sort_cmp(b),
                    SortDir::Desc => b.sort_cmp(a),
                })
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        decorated.into_iter().map(|(_, item)| item).collect()
    }
}

fn parse_keys<T: Schema>(raw: &str) -> ResultEngine<Vec<SortKey>> {
    let mut keys = Vec::new();
    for token in raw.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        let (dir, name) = match token.as_bytes()[0] {
            b'-' => (SortDir::Desc, &token[1..]),
            b'+' => (SortDir::Asc, &token[1..]),
            _ => (SortDir::Asc, token),
        };
        let name = name.trim();
        let field = T::sortable()
            .iter()
            .copied()
            .find(|field| field.eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::UnknownSortField {
                resource: T::RESOURCE,
                field: name.to_string(),
            })?;
        keys.push(SortKey { field, dir });
    }
    Ok(keys)
}

/// Order `items` by `spec`, or by the resource default when absent.
pub fn sort<'a, T, I>(items: I, spec: Option<&str>) -> ResultEngine<Vec<&'a T>>
where
    T: Schema,
    I: IntoIterator<Item = &'a T>,
{
    Ok(SortSpec::parse::<T>(spec)?.apply(items))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{Expense, ExpenseGroup};

    fn group(id: i64, user_id: &str, title: &str) -> ExpenseGroup {
        ExpenseGroup {
            id,
            user_id: user_id.to_string(),
            title: title.to_string(),
            description: None,
            expense_group_status_id: 1,
            expenses: Vec::new(),
        }
    }

    fn expense(id: i64, day: u32, amount: f64) -> Expense {
        Expense {
            id,
            description: None,
            date: Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap(),
            amount,
            expense_group_id: 1,
        }
    }

    fn ids<T>(items: &[&T], id: fn(&T) -> i64) -> Vec<i64> {
        items.iter().map(|item| id(item)).collect()
    }

    #[test]
    fn defaults_per_resource() {
        assert_eq!(
            SortSpec::parse::<ExpenseGroup>(None).unwrap().keys(),
            &[SortKey { field: "id", dir: SortDir::Asc }]
        );
        assert_eq!(
            SortSpec::parse::<Expense>(Some(" , ")).unwrap().keys(),
            &[SortKey { field: "date", dir: SortDir::Asc }]
        );
    }

    #[test]
    fn resolves_names_case_insensitively() {
        let spec = SortSpec::parse::<ExpenseGroup>(Some("-ID,+UserId")).unwrap();
        assert_eq!(
            spec.keys(),
            &[
                SortKey { field: "id", dir: SortDir::Desc },
                SortKey { field: "userId", dir: SortDir::Asc },
            ]
        );
    }

    #[test]
    fn rejects_unknown_and_unsortable_fields() {
        let err = SortSpec::parse::<ExpenseGroup>(Some("id,colour")).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownSortField {
                resource: ExpenseGroup::RESOURCE,
                field: "colour".to_string(),
            }
        );
        assert!(SortSpec::parse::<ExpenseGroup>(Some("expenses")).is_err());
        assert!(SortSpec::parse::<Expense>(Some("-")).is_err());
    }

    #[test]
    fn sorts_descending_without_touching_input() {
        let groups: Vec<_> = (1..=4).map(|id| group(id, "u", "t")).collect();
        let sorted = sort(&groups, Some("-id")).unwrap();
        assert_eq!(ids(&sorted, |g| g.id), vec![4, 3, 2, 1]);
        assert_eq!(groups.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn multi_key_applies_left_to_right() {
        let groups = vec![
            group(1, "bob", "b"),
            group(2, "alice", "z"),
            group(3, "bob", "a"),
            group(4, "alice", "a"),
        ];
        let sorted = sort(&groups, Some("userid,-title")).unwrap();
        assert_eq!(ids(&sorted, |g| g.id), vec![2, 4, 1, 3]);
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let expenses = vec![
            expense(5, 2, 10.0),
            expense(3, 1, 10.0),
            expense(9, 2, 1.0),
            expense(1, 1, 5.0),
        ];
        let sorted = sort(&expenses, Some("date")).unwrap();
        assert_eq!(ids(&sorted, |e| e.id), vec![3, 1, 5, 9]);

        let sorted = sort(&expenses, Some("-amount")).unwrap();
        assert_eq!(ids(&sorted, |e| e.id), vec![5, 3, 1, 9]);
    }
}
