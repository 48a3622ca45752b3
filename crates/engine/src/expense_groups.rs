//! Expense groups: a titled container of [`Expense`]s owned by a user.

use serde::{Deserialize, Serialize};

use crate::{
    Expense,
    schema::{Collection, Field, FieldValue, Schema},
    shaping::{self, ShapedObject},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpenseGroupStatus {
    Open,
    Confirmed,
    Processed,
}

impl ExpenseGroupStatus {
    /// Identifier stored in `ExpenseGroup::expense_group_status_id`.
    pub fn id(self) -> i64 {
        match self {
            Self::Open => 1,
            Self::Confirmed => 2,
            Self::Processed => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Confirmed => "confirmed",
            Self::Processed => "processed",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Open, Self::Confirmed, Self::Processed]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseGroup {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub expense_group_status_id: i64,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl ExpenseGroup {
    /// Copy of the group without its expenses.
    pub fn summary(&self) -> Self {
        Self {
            expenses: Vec::new(),
            ..self.clone()
        }
    }
}

static FIELDS: [Field<ExpenseGroup>; 6] = [
    Field {
        name: "id",
        value: |g| FieldValue::Int(g.id),
    },
    Field {
        name: "userId",
        value: |g| g.user_id.as_str().into(),
    },
    Field {
        name: "title",
        value: |g| g.title.as_str().into(),
    },
    Field {
        name: "description",
        value: |g| g.description.as_deref().into(),
    },
    Field {
        name: "expenseGroupStatusId",
        value: |g| FieldValue::Int(g.expense_group_status_id),
    },
    Field {
        name: "expenses",
        value: |g| {
            FieldValue::List(
                g.expenses
                    .iter()
                    .map(|e| FieldValue::Object(ShapedObject::full(e)))
                    .collect(),
            )
        },
    },
];

static SORTABLE: [&str; 5] = ["id", "userId", "title", "description", "expenseGroupStatusId"];

static EXPENSES: Collection<ExpenseGroup> = Collection {
    name: "expenses",
    validate: shaping::validate::<Expense>,
    shape: |g, fields| shaping::shape_all(&g.expenses, fields),
};

impl Schema for ExpenseGroup {
    const RESOURCE: &'static str = "expense group";
    const DEFAULT_SORT: &'static str = "id";
    const DEFAULT_PAGE_SIZE: u32 = 5;
    const MAX_PAGE_SIZE: u32 = 10;

    fn fields() -> &'static [Field<Self>] {
        &FIELDS
    }

    fn sortable() -> &'static [&'static str] {
        &SORTABLE
    }

    fn collection() -> Option<&'static Collection<Self>> {
        Some(&EXPENSES)
    }
}
