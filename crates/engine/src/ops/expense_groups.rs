use crate::{
    EngineError, ExpenseGroup, ExpenseGroupStatus, ResultEngine,
    fields::FieldSelection,
    pagination::Page,
    schema::Schema,
    shaping::Shaped,
};

use super::{Engine, ListQuery, list};

/// Filters for listing expense groups. `None` means "any".
#[derive(Clone, Debug, Default)]
pub struct ExpenseGroupFilter {
    pub status: Option<ExpenseGroupStatus>,
    pub user_id: Option<String>,
}

impl ExpenseGroupFilter {
    fn matches(&self, group: &ExpenseGroup) -> bool {
        self.status
            .is_none_or(|status| group.expense_group_status_id == status.id())
            && self
                .user_id
                .as_deref()
                .is_none_or(|user_id| group.user_id == user_id)
    }
}

impl Engine {
    /// Lists expense groups matching `filter`, sorted, paginated and shaped
    /// per `query`.
    ///
    /// Expenses are only carried when the field selection asks for them.
    pub fn list_expense_groups<F>(
        &self,
        query: &ListQuery,
        filter: &ExpenseGroupFilter,
        link: F,
    ) -> ResultEngine<Page<Shaped<'_, ExpenseGroup>>>
    where
        F: Fn(u32) -> String,
    {
        let fields = FieldSelection::parse(query.fields.as_deref());
        let source = match ExpenseGroup::collection() {
            Some(collection) if fields.wants_collection(collection.name) => &self.expense_groups,
            _ => &self.summaries,
        };

        list(
            source.iter().filter(|group| filter.matches(group)),
            query,
            link,
        )
    }

    /// One group with its expenses.
    pub fn expense_group(&self, id: i64) -> ResultEngine<&ExpenseGroup> {
        self.expense_groups
            .iter()
            .find(|group| group.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("expense group {id}")))
    }
}
