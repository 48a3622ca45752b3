use crate::{EngineError, Expense, ResultEngine, pagination::Page, shaping::Shaped};

use super::{Engine, ListQuery, list};

impl Engine {
    /// Lists the expenses of a group, sorted, paginated and shaped per
    /// `query`.
    pub fn list_expenses<F>(
        &self,
        expense_group_id: i64,
        query: &ListQuery,
        link: F,
    ) -> ResultEngine<Page<Shaped<'_, Expense>>>
    where
        F: Fn(u32) -> String,
    {
        let group = self.expense_group(expense_group_id)?;
        list(&group.expenses, query, link)
    }

    /// One expense, optionally looked up inside a given group only.
    pub fn expense(&self, id: i64, expense_group_id: Option<i64>) -> ResultEngine<&Expense> {
        let not_found = || EngineError::KeyNotFound(format!("expense {id}"));
        match expense_group_id {
            Some(group_id) => self
                .expense_group(group_id)?
                .expenses
                .iter()
                .find(|expense| expense.id == id)
                .ok_or_else(not_found),
            None => self
                .expense_groups
                .iter()
                .flat_map(|group| &group.expenses)
                .find(|expense| expense.id == id)
                .ok_or_else(not_found),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::ExpenseGroup;

    fn engine() -> Engine {
        let expense = |id: i64, group: i64| Expense {
            id,
            description: None,
            date: Utc.with_ymd_and_hms(2024, 1, id as u32, 0, 0, 0).unwrap(),
            amount: 1.0,
            expense_group_id: group,
        };
        let group = |id: i64, expenses: Vec<Expense>| ExpenseGroup {
            id,
            user_id: "alice".to_string(),
            title: "t".to_string(),
            description: None,
            expense_group_status_id: 1,
            expenses,
        };
        Engine::builder()
            .expense_groups(vec![
                group(1, vec![expense(1, 1), expense(2, 1)]),
                group(2, vec![expense(3, 2)]),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn expense_lookup_global_and_scoped() {
        let engine = engine();
        assert_eq!(engine.expense(3, None).unwrap().expense_group_id, 2);
        assert_eq!(engine.expense(3, Some(2)).unwrap().id, 3);
        assert_eq!(
            engine.expense(3, Some(1)),
            Err(EngineError::KeyNotFound("expense 3".to_string()))
        );
        assert_eq!(
            engine.expense(1, Some(9)),
            Err(EngineError::KeyNotFound("expense group 9".to_string()))
        );
    }

    #[test]
    fn listing_expenses_of_missing_group_fails() {
        let engine = engine();
        let query = ListQuery::first_page::<Expense>().unwrap();
        let err = engine.list_expenses(7, &query, |_| String::new()).unwrap_err();
        assert!(matches!(err, EngineError::KeyNotFound(_)));
    }
}
