use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all wiki endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::app_info))
        .route("/documents", get(handler::list_documents))
        .route(
            "/documents/:title",
            get(handler::list_revisions).post(handler::add_revision),
        )
        .route("/documents/:title/:timestamp", get(handler::get_revision))
        .route(
            "/documents/:title/as-of/:timestamp",
            get(handler::get_revision_as_of),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
