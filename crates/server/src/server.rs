use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use url::Url;

use std::sync::Arc;

use crate::{expense_groups, expenses};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Public base URL used to build pagination links.
    pub base_url: Arc<Url>,
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    tracing::debug!("{method} {uri} -> {}", response.status());
    response
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/expensegroups", get(expense_groups::list))
        .route("/api/expensegroups/{id}", get(expense_groups::get))
        .route(
            "/api/expensegroups/{expense_group_id}/expenses",
            get(expenses::list),
        )
        .route(
            "/api/expensegroups/{expense_group_id}/expenses/{id}",
            get(expenses::get_in_group),
        )
        .route("/api/expenses/{id}", get(expenses::get))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    base_url: Url,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        base_url: Arc::new(base_url),
    };

    axum::serve(listener, router(state)).await
}
