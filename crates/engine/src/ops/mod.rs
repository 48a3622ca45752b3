use std::collections::HashSet;

use crate::{
    EngineError, ExpenseGroup, ResultEngine,
    fields::FieldSelection,
    pagination::{self, Page, PageRequest},
    schema::Schema,
    shaping::{self, Shaped},
    sorting,
};

mod expense_groups;
mod expenses;

pub use expense_groups::ExpenseGroupFilter;

/// Parameters shared by every list operation.
#[derive(Clone, Debug)]
pub struct ListQuery {
    pub page: PageRequest,
    pub sort: Option<String>,
    pub fields: Option<String>,
}

impl ListQuery {
    /// First page with the resource defaults.
    pub fn first_page<T: Schema>() -> ResultEngine<Self> {
        Ok(Self {
            page: PageRequest::for_resource::<T>(None, None)?,
            sort: None,
            fields: None,
        })
    }
}

/// In-memory view over the expense store.
///
/// Groups are kept twice: with their expenses, and as summaries without
/// them, so that listings that do not ask for expenses never carry them.
#[derive(Debug, Default)]
pub struct Engine {
    expense_groups: Vec<ExpenseGroup>,
    summaries: Vec<ExpenseGroup>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Filter → sort → paginate → shape.
fn list<'a, T, I, F>(items: I, query: &ListQuery, link: F) -> ResultEngine<Page<Shaped<'a, T>>>
where
    T: Schema,
    I: IntoIterator<Item = &'a T>,
    F: Fn(u32) -> String,
{
    let fields = FieldSelection::parse(query.fields.as_deref());
    shaping::validate::<T>(&fields)?;

    let sorted = sorting::sort(items, query.sort.as_deref())?;
    pagination::paginate(sorted, &query.page, link).try_map(|item| shaping::shape(item, &fields))
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    expense_groups: Vec<ExpenseGroup>,
}

impl EngineBuilder {
    /// Pass the groups, each with its expenses.
    pub fn expense_groups(mut self, groups: Vec<ExpenseGroup>) -> EngineBuilder {
        self.expense_groups = groups;
        self
    }

    /// Pass the groups as a JSON array.
    pub fn seed_json(self, json: &str) -> ResultEngine<EngineBuilder> {
        let groups: Vec<ExpenseGroup> =
            serde_json::from_str(json).map_err(|err| EngineError::Seed(err.to_string()))?;
        Ok(self.expense_groups(groups))
    }

    /// Construct `Engine`
    ///
    /// Fails when ids are duplicated or an expense references a group other
    /// than the one holding it.
    pub fn build(self) -> ResultEngine<Engine> {
        let mut group_ids = HashSet::new();
        let mut expense_ids = HashSet::new();
        for group in &self.expense_groups {
            if !group_ids.insert(group.id) {
                return Err(EngineError::Seed(format!(
                    "duplicate expense group id {}",
                    group.id
                )));
            }
            for expense in &group.expenses {
                if !expense_ids.insert(expense.id) {
                    return Err(EngineError::Seed(format!(
                        "duplicate expense id {}",
                        expense.id
                    )));
                }
                if expense.expense_group_id != group.id {
                    return Err(EngineError::Seed(format!(
                        "expense {} references group {} but belongs to group {}",
                        expense.id, expense.expense_group_id, group.id
                    )));
                }
            }
        }

        let summaries = self
            .expense_groups
            .iter()
            .map(ExpenseGroup::summary)
            .collect();
        Ok(Engine {
            expense_groups: self.expense_groups,
            summaries,
        })
    }
}
