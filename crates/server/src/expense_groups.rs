//! Expense groups API endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use engine::{ExpenseGroup, ExpenseGroupFilter, ExpenseGroupStatus, ListQuery, PageRequest};

use crate::{
    ServerError, expenses,
    paging::{PageLinks, paginated},
    server::ServerState,
    types::expense_group::{ExpenseGroup as ExpenseGroupView, ExpenseGroupList},
};

fn status_filter(status: Option<&str>) -> Option<ExpenseGroupStatus> {
    let status = status?;
    let parsed = ExpenseGroupStatus::from_name(status);
    if parsed.is_none() {
        tracing::debug!("ignoring unknown status filter \"{status}\"");
    }
    parsed
}

pub(crate) fn view(group: &ExpenseGroup) -> ExpenseGroupView {
    ExpenseGroupView {
        id: group.id,
        user_id: group.user_id.clone(),
        title: group.title.clone(),
        description: group.description.clone(),
        expense_group_status_id: group.expense_group_status_id,
        expenses: group.expenses.iter().map(expenses::view).collect(),
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ExpenseGroupList>,
) -> Result<Response, ServerError> {
    let page = PageRequest::for_resource::<ExpenseGroup>(params.page, params.page_size)?;
    let filter = ExpenseGroupFilter {
        status: status_filter(params.status.as_deref()),
        user_id: params.user_id.clone(),
    };
    let links = PageLinks::new(&state.base_url, "api/expensegroups")?
        .param("sort", params.sort.as_deref())
        .param("status", params.status.as_deref())
        .param("userId", params.user_id.as_deref())
        .param("fields", params.fields.as_deref());

    let query = ListQuery {
        page,
        sort: params.sort,
        fields: params.fields,
    };
    let result = state
        .engine
        .list_expense_groups(&query, &filter, |n| links.link(n, page.page_size()))?;

    paginated(result)
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ExpenseGroupView>, ServerError> {
    let group = state.engine.expense_group(id)?;
    Ok(Json(view(group)))
}
