//! Expenses API endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use engine::{Expense, ListQuery, PageRequest};

use crate::{
    ServerError,
    paging::{PageLinks, paginated},
    server::ServerState,
    types::expense::{Expense as ExpenseView, ExpenseList},
};

pub(crate) fn view(expense: &Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        description: expense.description.clone(),
        date: expense.date,
        amount: expense.amount,
        expense_group_id: expense.expense_group_id,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(expense_group_id): Path<i64>,
    Query(params): Query<ExpenseList>,
) -> Result<Response, ServerError> {
    let page = PageRequest::for_resource::<Expense>(params.page, params.page_size)?;
    let links = PageLinks::new(
        &state.base_url,
        &format!("api/expensegroups/{expense_group_id}/expenses"),
    )?
    .param("sort", params.sort.as_deref())
    .param("fields", params.fields.as_deref());

    let query = ListQuery {
        page,
        sort: params.sort,
        fields: params.fields,
    };
    let result = state
        .engine
        .list_expenses(expense_group_id, &query, |n| links.link(n, page.page_size()))?;

    paginated(result)
}

pub async fn get_in_group(
    State(state): State<ServerState>,
    Path((expense_group_id, id)): Path<(i64, i64)>,
) -> Result<Json<ExpenseView>, ServerError> {
    let expense = state.engine.expense(id, Some(expense_group_id))?;
    Ok(Json(view(expense)))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ExpenseView>, ServerError> {
    let expense = state.engine.expense(id, None)?;
    Ok(Json(view(expense)))
}
