//! # View Counter API
//!
//! HTTP endpoint backing the page-view counter shown on blog posts.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/views` | Record a view; body `{"slug": "..."}` |
//! | `GET`  | `/api/views?slug=...` | Read the current count |
//!
//! Both return `{"views": n}`. A missing slug is `400 {"error": "Slug is
//! required"}`. A failed write is `500 {"error": "Failed to update views"}`;
//! a failed read still answers `200 {"views": 0}`.
//!
//! All origins, methods and headers are permitted so the static site can call
//! the API from the browser.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::views::{current_views, record_view, ViewError, ViewStore};

/// Shared state for the route handlers
#[derive(Clone)]
struct AppState {
    store: Arc<dyn ViewStore>,
}

/// Body of `POST /api/views`
#[derive(Debug, Default, Deserialize)]
pub struct ViewRequest {
    pub slug: Option<serde_json::Value>,
}

impl ViewRequest {
    /// The slug as text. Strings are taken verbatim and numbers in their JSON
    /// form; `0`, `false`, `null` and non-scalar values count as missing.
    pub fn slug(&self) -> Option<String> {
        match self.slug.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Query of `GET /api/views`
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub slug: Option<String>,
}

#[derive(Debug, Serialize)]
struct ViewsBody {
    views: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

const UPDATE_FAILED: &str = "Failed to update views";

fn views_response(views: u64) -> Response {
    (StatusCode::OK, Json(ViewsBody { views })).into_response()
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

/// Builds the API router around a view store.
pub fn router(store: Arc<dyn ViewStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/views", get(handle_get_views).post(handle_record_view))
        .layer(cors)
        .with_state(AppState { store })
}

/// Serves the API on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, store: Arc<dyn ViewStore>) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    tracing::info!(%addr, "view counter listening");

    axum::serve(listener, router(store))
        .await
        .context("View counter server failed")
}

/// Binds `bind` and serves the API.
pub async fn run_server(bind: &str, store: Arc<dyn ViewStore>) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    serve(listener, store).await
}

// ============ POST /api/views ============

async fn handle_record_view(
    State(state): State<AppState>,
    body: Result<Json<ViewRequest>, JsonRejection>,
) -> Response {
    let slug = match body {
        Ok(Json(request)) => request.slug(),
        Err(rejection) => {
            tracing::warn!("unreadable view request: {rejection}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED);
        }
    };

    let store = state.store;
    let result = tokio::task::spawn_blocking(move || record_view(store.as_ref(), slug.as_deref())).await;

    match result {
        Ok(Ok(views)) => views_response(views),
        Ok(Err(ViewError::MissingSlug)) => {
            error_response(StatusCode::BAD_REQUEST, "Slug is required")
        }
        Ok(Err(e)) => {
            tracing::error!("{e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED)
        }
        Err(e) => {
            tracing::error!("view recording task failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED)
        }
    }
}

// ============ GET /api/views ============

async fn handle_get_views(State(state): State<AppState>, Query(query): Query<ViewQuery>) -> Response {
    let store = state.store;
    let slug = query.slug;
    let result =
        tokio::task::spawn_blocking(move || current_views(store.as_ref(), slug.as_deref())).await;

    match result {
        Ok(Ok(views)) => views_response(views),
        Ok(Err(ViewError::MissingSlug)) => {
            error_response(StatusCode::BAD_REQUEST, "Slug is required")
        }
        Ok(Err(e)) => {
            tracing::warn!("{e}");
            views_response(0)
        }
        Err(e) => {
            tracing::warn!("view lookup task failed: {e}");
            views_response(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::MemoryStore;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn state(store: MemoryStore) -> State<AppState> {
        State(AppState {
            store: Arc::new(store),
        })
    }

    #[tokio::test]
    async fn test_post_inserts_then_increments() {
        let store: Arc<dyn ViewStore> = Arc::new(MemoryStore::new());
        let app_state = AppState { store };

        for expected in 1..=2 {
            let request = ViewRequest {
                slug: Some(serde_json::json!("hello")),
            };
            let response = handle_record_view(State(app_state.clone()), Ok(Json(request))).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, serde_json::json!({ "views": expected }));
        }
    }

    #[tokio::test]
    async fn test_post_without_slug_is_bad_request() {
        let response =
            handle_record_view(state(MemoryStore::new()), Ok(Json(ViewRequest::default()))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Slug is required" })
        );
    }

    #[test]
    fn test_request_slug_accepts_strings_and_numbers() {
        let slug = |body: &str| serde_json::from_str::<ViewRequest>(body).unwrap().slug();

        assert_eq!(slug(r#"{"slug": "hello"}"#).as_deref(), Some("hello"));
        assert_eq!(slug(r#"{"slug": "  spaced  "}"#).as_deref(), Some("  spaced  "));
        assert_eq!(slug(r#"{"slug": 42}"#).as_deref(), Some("42"));
        assert_eq!(slug(r#"{"slug": 0}"#), None);
        assert_eq!(slug(r#"{"slug": ""}"#).as_deref(), Some(""));
        assert_eq!(slug(r#"{"slug": null}"#), None);
        assert_eq!(slug(r#"{"slug": ["a"]}"#), None);
    }

    #[tokio::test]
    async fn test_post_numeric_slug_is_recorded() {
        let request: ViewRequest = serde_json::from_str(r#"{"slug": 42}"#).unwrap();
        let response = handle_record_view(state(MemoryStore::new()), Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "views": 1 }));
    }

    #[tokio::test]
    async fn test_post_blank_slug_is_kept_verbatim() {
        let store = Arc::new(MemoryStore::new());
        let app_state = AppState {
            store: store.clone(),
        };
        let request = ViewRequest {
            slug: Some(serde_json::json!(" ")),
        };
        let response = handle_record_view(State(app_state), Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.fetch(" ").unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_get_reads_count() {
        let store = MemoryStore::with_counts([("hello", 9)]);
        let query = ViewQuery {
            slug: Some("hello".into()),
        };
        let response = handle_get_views(state(store), Query(query)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "views": 9 }));
    }

    #[tokio::test]
    async fn test_get_unknown_slug_is_zero() {
        let query = ViewQuery {
            slug: Some("nope".into()),
        };
        let response = handle_get_views(state(MemoryStore::new()), Query(query)).await;
        assert_eq!(body_json(response).await, serde_json::json!({ "views": 0 }));
    }

    #[tokio::test]
    async fn test_get_without_slug_is_bad_request() {
        let response = handle_get_views(state(MemoryStore::new()), Query(ViewQuery::default())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
