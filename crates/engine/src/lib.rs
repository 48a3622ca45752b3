//! Expense tracker engine.
//!
//! Holds the expense groups and turns list requests into shaped, sorted and
//! paginated results:
//!
//! 1. [`FieldSelection`] parses the `fields` parameter;
//! 2. [`sorting`] orders the items by the `sort` parameter;
//! 3. [`pagination`] slices the requested page and builds its metadata;
//! 4. [`shaping`] keeps only the selected fields of every item.

pub use error::EngineError;
pub use expense_groups::{ExpenseGroup, ExpenseGroupStatus};
pub use expenses::Expense;
pub use fields::FieldSelection;
pub use ops::{Engine, EngineBuilder, ExpenseGroupFilter, ListQuery};
pub use pagination::{Page, PageRequest, PaginationMetadata};
pub use schema::{FieldValue, Schema};
pub use shaping::{Shaped, ShapedObject};
pub use sorting::{SortDir, SortKey, SortSpec};

mod error;
mod expense_groups;
mod expenses;
mod fields;
mod ops;
pub mod pagination;
pub mod schema;
pub mod shaping;
pub mod sorting;

type ResultEngine<T> = Result<T, EngineError>;
