use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Json;
use wiki_types::{Revision, RevisionHistory, Selector, Timestamp};

use crate::api::{AppInfo, WriteRequest};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

type PathParams<T> = Result<Path<T>, PathRejection>;

/// Service identification.
pub async fn app_info() -> Json<AppInfo> {
    Json(AppInfo::default())
}

/// A path that cannot be decoded names nothing that could exist.
fn lookup_path<T>(path: PathParams<T>) -> ServerResult<T> {
    path.map(|Path(params)| params).map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable lookup path");
        ServerError::NotFound
    })
}

pub async fn list_documents(State(state): State<AppState>) -> ServerResult<Json<Vec<String>>> {
    Ok(Json(state.store.list_titles()?))
}

pub async fn list_revisions(
    State(state): State<AppState>,
    path: PathParams<String>,
) -> ServerResult<Json<RevisionHistory>> {
    let title = lookup_path(path)?;
    state
        .store
        .list_revisions(&title)?
        .map(Json)
        .ok_or(ServerError::NotFound)
}

/// Record a new revision. The path and body are checked before the store is
/// touched.
///
/// Every body rejection, including exceeding the request size limit, is
/// reported as BAD_REQUEST with the same `No JSON content` reason.
pub async fn add_revision(
    State(state): State<AppState>,
    path: PathParams<String>,
    payload: Result<Json<WriteRequest>, JsonRejection>,
) -> ServerResult<Json<Revision>> {
    let Path(title) = path.map_err(|rejection| {
        tracing::warn!(%rejection, "rejected revision path");
        ServerError::BadRequest(rejection.body_text())
    })?;
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(%title, %rejection, "rejected revision body");
        ServerError::BadRequest(rejection.body_text())
    })?;
    let revision = state.store.add_revision(&title, &request.content)?;
    Ok(Json(revision))
}

pub async fn get_revision(
    State(state): State<AppState>,
    path: PathParams<(String, String)>,
) -> ServerResult<Json<Revision>> {
    let (title, selector) = lookup_path(path)?;
    let selector = Selector::parse(&selector);
    state
        .store
        .get_revision(&title, &selector)?
        .map(Json)
        .ok_or(ServerError::NotFound)
}

/// Nearest-prior lookup. A timestamp that does not parse finds nothing.
pub async fn get_revision_as_of(
    State(state): State<AppState>,
    path: PathParams<(String, String)>,
) -> ServerResult<Json<Revision>> {
    let (title, at) = lookup_path(path)?;
    let at: Timestamp = at.parse().map_err(|_| ServerError::NotFound)?;
    state
        .store
        .revision_as_of(&title, at)?
        .map(Json)
        .ok_or(ServerError::NotFound)
}
