//! A single expense, the line item of an [`ExpenseGroup`].
//!
//! [`ExpenseGroup`]: crate::ExpenseGroup

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{Field, FieldValue, Schema};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub expense_group_id: i64,
}

static FIELDS: [Field<Expense>; 5] = [
    Field {
        name: "id",
        value: |e| FieldValue::Int(e.id),
    },
    Field {
        name: "description",
        value: |e| e.description.as_deref().into(),
    },
    Field {
        name: "date",
        value: |e| FieldValue::Date(e.date),
    },
    Field {
        name: "amount",
        value: |e| FieldValue::Float(e.amount),
    },
    Field {
        name: "expenseGroupId",
        value: |e| FieldValue::Int(e.expense_group_id),
    },
];

static SORTABLE: [&str; 5] = ["id", "description", "date", "amount", "expenseGroupId"];

impl Schema for Expense {
    const RESOURCE: &'static str = "expense";
    const DEFAULT_SORT: &'static str = "date";
    const DEFAULT_PAGE_SIZE: u32 = 2;
    const MAX_PAGE_SIZE: u32 = 2;

    fn fields() -> &'static [Field<Self>] {
        &FIELDS
    }

    fn sortable() -> &'static [&'static str] {
        &SORTABLE
    }
}
