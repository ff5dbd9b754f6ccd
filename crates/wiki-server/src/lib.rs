//! HTTP server for the wiki revision store.
//!
//! Exposes a [`RevisionStore`](wiki_store::RevisionStore) as a small JSON
//! REST API. The store is built once and handed to the router; handlers only
//! translate between HTTP and store calls.
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/` | `{"app": "wiki"}` |
//! | GET | `/documents` | titles in first-write order |
//! | GET | `/documents/{title}` | every revision, keyed by timestamp |
//! | POST | `/documents/{title}` | new revision from `{"content": ...}` |
//! | GET | `/documents/{title}/{timestamp}` | exact revision, or `latest` |
//! | GET | `/documents/{title}/as-of/{timestamp}` | nearest prior revision |

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use api::{AppInfo, ErrorBody, WriteRequest};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::WikiServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;
    use wiki_store::{InMemoryRevisionStore, ManualClock};
    use wiki_types::Timestamp;

    const T0: u64 = 1_700_000_000;

    fn app() -> (Router, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Timestamp::from_secs(T0)));
        let store = Arc::new(InMemoryRevisionStore::with_clock(clock.clone()));
        (router::build_router(AppState::new(store)), clock)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(app, request).await
    }

    async fn post_raw(
        app: &Router,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        send(app, builder.body(Body::from(body.to_string())).unwrap()).await
    }

    async fn post(app: &Router, title: &str, content: &str) -> Value {
        let body = json!({ "content": content }).to_string();
        let (status, value) = post_raw(
            app,
            &format!("/documents/{title}"),
            Some("application/json"),
            &body,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        value
    }

    fn no_results() -> Value {
        json!({"reason": "No results"})
    }

    fn no_json() -> Value {
        json!({"reason": "No JSON content"})
    }

    // -----------------------------------------------------------------------
    // Service identity and listing
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn root_identifies_app() {
        let (app, _) = app();
        assert_eq!(get(&app, "/").await, (StatusCode::OK, json!({"app": "wiki"})));
    }

    #[tokio::test]
    async fn documents_empty() {
        let (app, _) = app();
        assert_eq!(get(&app, "/documents").await, (StatusCode::OK, json!([])));
    }

    #[tokio::test]
    async fn documents_after_one_post() {
        let (app, _) = app();
        post(&app, "firstdoc", "The first document").await;
        assert_eq!(
            get(&app, "/documents").await,
            (StatusCode::OK, json!(["firstdoc"]))
        );
    }

    #[tokio::test]
    async fn documents_listed_in_first_write_order() {
        let (app, clock) = app();
        post(&app, "seconddoc", "b").await;
        clock.advance(1);
        post(&app, "firstdoc", "a").await;
        clock.advance(1);
        post(&app, "seconddoc", "b2").await;
        assert_eq!(
            get(&app, "/documents").await,
            (StatusCode::OK, json!(["seconddoc", "firstdoc"]))
        );
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn post_returns_written_revision() {
        let (app, _) = app();
        let body = post(&app, "firstdoc", "The first document").await;
        assert_eq!(
            body,
            json!({
                "title": "firstdoc",
                "content": "The first document",
                "timestamp": T0.to_string(),
            })
        );
    }

    #[tokio::test]
    async fn post_without_json_is_rejected_and_creates_nothing() {
        let (app, _) = app();
        let cases = [
            (Some("application/json"), "not json"),
            (Some("application/json"), ""),
            (Some("text/plain"), r#"{"content": "x"}"#),
            (None, r#"{"content": "x"}"#),
            (Some("application/json"), r#"{"body": "x"}"#),
            (Some("application/json"), r#"{"content": 5}"#),
            (Some("application/json"), r#"["content"]"#),
        ];
        for (content_type, body) in cases {
            let (status, value) = post_raw(&app, "/documents/doc", content_type, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
            assert_eq!(value, no_json());
        }
        assert_eq!(get(&app, "/documents").await.1, json!([]));
        assert_eq!(get(&app, "/documents/doc").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejected_post_leaves_existing_document_untouched() {
        let (app, clock) = app();
        post(&app, "doc", "v1").await;
        clock.advance(1);
        let (status, _) = post_raw(&app, "/documents/doc", Some("application/json"), "{").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, history) = get(&app, "/documents/doc").await;
        assert_eq!(history["revisions"], json!({ T0.to_string(): "v1" }));
    }

    #[tokio::test]
    async fn oversized_body_is_bad_request() {
        let (app, _) = app();
        let body = json!({ "content": "x".repeat(3 * 1024 * 1024) }).to_string();
        let (status, value) =
            post_raw(&app, "/documents/big", Some("application/json"), &body).await;
        assert_eq!((status, value), (StatusCode::BAD_REQUEST, no_json()));
        assert_eq!(get(&app, "/documents").await.1, json!([]));
    }

    // -----------------------------------------------------------------------
    // Undecodable paths
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn non_utf8_title_lookups_find_nothing() {
        let (app, _) = app();
        post(&app, "doc", "v1").await;
        for uri in [
            "/documents/%FF",
            "/documents/%FF/latest",
            "/documents/%FF/as-of/1700000000",
            "/documents/doc/%FF",
        ] {
            assert_eq!(
                get(&app, uri).await,
                (StatusCode::NOT_FOUND, no_results()),
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn non_utf8_title_write_is_bad_request() {
        let (app, _) = app();
        let body = json!({ "content": "x" }).to_string();
        let (status, value) =
            post_raw(&app, "/documents/%FF", Some("application/json"), &body).await;
        assert_eq!((status, value), (StatusCode::BAD_REQUEST, no_json()));
        assert_eq!(get(&app, "/documents").await.1, json!([]));
    }

    // -----------------------------------------------------------------------
    // Revision listing
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn revisions_not_found() {
        let (app, _) = app();
        assert_eq!(
            get(&app, "/documents/notexist").await,
            (StatusCode::NOT_FOUND, no_results())
        );
    }

    #[tokio::test]
    async fn revisions_keep_every_write() {
        let (app, clock) = app();
        post(&app, "firstdoc", "The first document").await;
        clock.advance(1);
        post(&app, "firstdoc", "The first document updated").await;

        let (status, body) = get(&app, "/documents/firstdoc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "title": "firstdoc",
                "revisions": {
                    T0.to_string(): "The first document",
                    (T0 + 1).to_string(): "The first document updated",
                },
            })
        );
    }

    // -----------------------------------------------------------------------
    // Single revision lookup
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn get_by_returned_timestamp() {
        let (app, clock) = app();
        let first = post(&app, "firstdoc", "The first document").await;
        clock.advance(1);
        post(&app, "firstdoc", "The first document updated").await;

        let ts = first["timestamp"].as_str().unwrap();
        let (status, doc) = get(&app, &format!("/documents/firstdoc/{ts}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            doc,
            json!({"title": "firstdoc", "timestamp": ts, "content": "The first document"})
        );
    }

    #[tokio::test]
    async fn get_latest() {
        let (app, clock) = app();
        post(&app, "firstdoc", "The first document").await;
        clock.advance(1);
        post(&app, "firstdoc", "The first document updated").await;

        let (status, doc) = get(&app, "/documents/firstdoc/latest").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["content"], "The first document updated");
        assert_eq!(doc["timestamp"], (T0 + 1).to_string());
    }

    #[tokio::test]
    async fn latest_follows_call_order() {
        let (app, clock) = app();
        post(&app, "doc", "ahead").await;
        clock.set(Timestamp::from_secs(T0 - 60));
        post(&app, "doc", "behind").await;

        let (_, doc) = get(&app, "/documents/doc/latest").await;
        assert_eq!(doc["content"], "behind");
    }

    #[tokio::test]
    async fn get_unknown_title_with_selector() {
        let (app, _) = app();
        for selector in ["latest", "1700000000"] {
            assert_eq!(
                get(&app, &format!("/documents/nope/{selector}")).await,
                (StatusCode::NOT_FOUND, no_results())
            );
        }
    }

    #[tokio::test]
    async fn exact_lookup_never_interpolates() {
        let (app, clock) = app();
        post(&app, "doc", "v1").await;
        clock.advance(10);
        post(&app, "doc", "v2").await;

        let misses = [
            (T0 - 1).to_string(),
            (T0 + 5).to_string(),
            (T0 + 11).to_string(),
            "9999999999".to_string(),
            format!("{T0}.5"),
            format!("0{T0}"),
            "LATEST".to_string(),
        ];
        for selector in misses {
            assert_eq!(
                get(&app, &format!("/documents/doc/{selector}")).await,
                (StatusCode::NOT_FOUND, no_results()),
                "selector {selector}"
            );
        }
    }

    #[tokio::test]
    async fn scenario_v1_v2() {
        let (app, clock) = app();
        let ts1 = post(&app, "doc", "v1").await["timestamp"].clone();
        clock.advance(1);
        post(&app, "doc", "v2").await;

        let ts1 = ts1.as_str().unwrap();
        assert_eq!(get(&app, &format!("/documents/doc/{ts1}")).await.1["content"], "v1");
        assert_eq!(get(&app, "/documents/doc/latest").await.1["content"], "v2");
        assert_eq!(
            get(&app, "/documents/doc/9999999999").await.0,
            StatusCode::NOT_FOUND
        );
    }

    // -----------------------------------------------------------------------
    // As-of lookup
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn as_of_resolves_nearest_prior() {
        let (app, clock) = app();
        post(&app, "doc", "v1").await;
        clock.advance(10);
        post(&app, "doc", "v2").await;

        let (status, between) = get(&app, &format!("/documents/doc/as-of/{}", T0 + 5)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(between["content"], "v1");
        assert_eq!(between["timestamp"], T0.to_string());

        let (_, after) = get(&app, &format!("/documents/doc/as-of/{}", T0 + 100)).await;
        assert_eq!(after["content"], "v2");
    }

    #[tokio::test]
    async fn as_of_misses() {
        let (app, _) = app();
        post(&app, "doc", "v1").await;

        for uri in [
            format!("/documents/doc/as-of/{}", T0 - 1),
            "/documents/doc/as-of/soon".to_string(),
            format!("/documents/other/as-of/{T0}"),
        ] {
            assert_eq!(get(&app, &uri).await, (StatusCode::NOT_FOUND, no_results()), "{uri}");
        }
    }
}
