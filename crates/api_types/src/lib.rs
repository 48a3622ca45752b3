use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the response header carrying [`pagination::PaginationHeader`].
pub const PAGINATION_HEADER: &str = "X-Pagination";

pub mod pagination {
    use super::*;

    /// Navigation metadata of a list response, JSON encoded in the
    /// `X-Pagination` header.
    ///
    /// Links are empty strings when the page does not exist.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PaginationHeader {
        pub current_page: u32,
        pub page_size: u32,
        pub total_count: u64,
        pub total_pages: u64,
        pub previous_page_link: String,
        pub next_page_link: String,
    }
}

pub mod expense_group {
    use super::*;

    /// Query string of `GET /api/expensegroups`.
    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseGroupList {
        /// Comma-separated sort keys, `-` prefix for descending. Default `id`.
        pub sort: Option<String>,
        /// `open`, `confirmed` or `processed`. Other values do not filter.
        pub status: Option<String>,
        pub user_id: Option<String>,
        /// Comma-separated field selection, e.g. `title,expenses.amount`.
        pub fields: Option<String>,
        pub page: Option<i64>,
        pub page_size: Option<i64>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseGroup {
        pub id: i64,
        pub user_id: String,
        pub title: String,
        pub description: Option<String>,
        pub expense_group_status_id: i64,
        pub expenses: Vec<super::expense::Expense>,
    }
}

pub mod expense {
    use super::*;

    /// Query string of `GET /api/expensegroups/{id}/expenses`.
    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseList {
        /// Comma-separated sort keys, `-` prefix for descending. Default `date`.
        pub sort: Option<String>,
        pub fields: Option<String>,
        pub page: Option<i64>,
        pub page_size: Option<i64>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Expense {
        pub id: i64,
        pub description: Option<String>,
        pub date: DateTime<Utc>,
        pub amount: f64,
        pub expense_group_id: i64,
    }
}
