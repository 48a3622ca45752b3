use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod expense_groups;
mod expenses;
mod paging;
mod server;

pub mod types {
    pub mod expense_group {
        pub use api_types::expense_group::{ExpenseGroup, ExpenseGroupList};
    }

    pub mod expense {
        pub use api_types::expense::{Expense, ExpenseList};
    }

    pub mod pagination {
        pub use api_types::PAGINATION_HEADER;
        pub use api_types::pagination::PaginationHeader;
    }
}

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    Internal(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Seed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::UnknownField { .. }
        | EngineError::UnknownSortField { .. }
        | EngineError::InvalidPage(_) => StatusCode::BAD_REQUEST,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Seed(seed_err) => {
            tracing::error!("seed error: {seed_err}");
            "internal server error".to_string()
        }
        other => {
            if other.is_usage_error() {
                tracing::warn!("rejected request: {other}");
            }
            other.to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Internal(err) => {
                tracing::error!("internal error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_maps_to_400() {
        let res = ServerError::from(EngineError::UnknownField {
            resource: "expense",
            field: "x".to_string(),
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_sort_field_maps_to_400() {
        let res = ServerError::from(EngineError::UnknownSortField {
            resource: "expense",
            field: "x".to_string(),
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_page_maps_to_400() {
        let res = ServerError::from(EngineError::InvalidPage("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn seed_error_maps_to_500() {
        let res = ServerError::from(EngineError::Seed("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
