//! HTTP transport.
//!
//! Handlers decode requests, run presence checks, call the services and map
//! results onto status codes. The services carry no logic of their own, so
//! this is the only layer that interprets the zero-value sentinel returned by
//! failed creates (reported as 404).

pub mod board;
pub mod card;
pub mod dto;
pub mod list;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    domain::{sort_entities, Entity, SortField, SortOrder},
    error::TaskboardError,
    service::{BoardService, CardService, ListService},
    storage::Storage,
};
use dto::FetchQuery;

/// Shared state injected into handlers via the `State` extractor
#[derive(Clone)]
pub struct AppState {
    pub boards: BoardService,
    pub lists: ListService,
    pub cards: CardService,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            boards: BoardService::new(Arc::clone(&storage)),
            lists: ListService::new(Arc::clone(&storage)),
            cards: CardService::new(storage),
        }
    }
}

/// Builds the router for the board, list and card routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/boards", get(board::get_boards).post(board::create_board))
        .route("/lists", get(list::get_lists).post(list::create_list))
        .route(
            "/cards",
            get(card::get_cards)
                .post(card::create_card)
                .put(card::update_card)
                .delete(card::delete_card),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Error body is always `{"error": "<message>"}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::Internal(msg) => msg,
        }
    }

    /// Rejects a request that failed a presence check
    pub(crate) fn invalid(msg: &str) -> Self {
        tracing::warn!(reason = msg, "request rejected");
        Self::BadRequest(msg.to_string())
    }
}

impl From<TaskboardError> for ApiError {
    fn from(err: TaskboardError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else {
            tracing::error!(error = %err, "storage failure");
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

/// Applies `?sort=` / `?order=` to a fetched collection, if requested
pub(crate) fn apply_sort<T: Entity>(items: &mut [T], query: &FetchQuery) -> Result<(), ApiError> {
    let Some(field) = query.sort.as_deref() else {
        return Ok(());
    };
    let field: SortField = field.parse().map_err(|e: String| ApiError::invalid(&e))?;
    let order: SortOrder = match query.order.as_deref() {
        Some(order) => order.parse().map_err(|e: String| ApiError::invalid(&e))?,
        None => SortOrder::default(),
    };

    sort_entities(items, field, order);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Arc::new(MemoryStorage::new())))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Board 1 / list 1 / card 1
    async fn seeded_app() -> Router {
        let app = app();
        send(&app, Method::POST, "/boards", Some(json!({ "title": "Board" }))).await;
        send(&app, Method::POST, "/lists", Some(json!({ "title": "List", "board_id": 1 }))).await;
        send(
            &app,
            Method::POST,
            "/cards",
            Some(json!({ "title": "Card", "board_id": 1, "list_id": 1 })),
        )
        .await;
        app
    }

    #[test]
    fn test_error_status_mapping() {
        let err = ApiError::from(TaskboardError::ListNotFound {
            list_id: 2,
            board_id: 1,
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "list 2 not found in board 1");

        let err = ApiError::from(TaskboardError::StoreNotInitialized);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_healthz() {
        let (status, _) = send(&app(), Method::GET, "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_and_list_boards() {
        let app = app();

        let (status, body) =
            send(&app, Method::POST, "/boards", Some(json!({ "title": "B" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": 1, "title": "B" }));

        send(&app, Method::POST, "/boards", Some(json!({ "title": "A" }))).await;

        let (status, body) = send(&app, Method::GET, "/boards?sort=title", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": 2, "title": "A" }, { "id": 1, "title": "B" }]));
    }

    #[tokio::test]
    async fn test_create_board_requires_title() {
        let (status, body) =
            send(&app(), Method::POST, "/boards", Some(json!({ "title": "" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "title is required");
    }

    #[tokio::test]
    async fn test_invalid_sort_field() {
        let (status, _) = send(&app(), Method::GET, "/boards?sort=color", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_list_missing_board_is_not_found() {
        let app = app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/lists",
            Some(json!({ "title": "Orphan", "board_id": 9 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let body = json!({ "title": "No board" });
        let (status, _) = send(&app, Method::POST, "/lists", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_lists_by_id() {
        let app = seeded_app().await;

        let (status, body) = send(&app, Method::GET, "/lists?id=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": 1, "title": "List", "board_id": 1 }]));

        let (status, body) = send(&app, Method::GET, "/lists?id=42", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_card_round_trip() {
        let app = seeded_app().await;

        let (status, body) = send(&app, Method::GET, "/cards?id=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["title"], "Card");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/cards",
            Some(json!({
                "id": 1,
                "board_id": 1,
                "list_id": 1,
                "title": "New",
                "description": "NewD"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": 1, "title": "New", "description": "NewD", "board_id": 1, "list_id": 1 })
        );

        let (status, body) = send(
            &app,
            Method::DELETE,
            "/cards",
            Some(json!({ "board_id": 1, "list_id": 1, "card_id": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "New");

        let (_, body) = send(&app, Method::GET, "/cards?id=1", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_card_validation() {
        let app = seeded_app().await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/cards",
            Some(json!({ "title": "", "board_id": 1, "list_id": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body = json!({ "title": "X", "board_id": 1 });
        let (status, _) = send(&app, Method::POST, "/cards", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            "/cards",
            Some(json!({ "title": "X", "board_id": 1, "list_id": 999 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_card_with_description() {
        let app = seeded_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/cards",
            Some(json!({
                "title": "Second",
                "description": "Details",
                "board_id": 1,
                "list_id": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 2);
        assert_eq!(body["description"], "Details");

        let (_, body) = send(&app, Method::GET, "/cards?id=2", None).await;
        assert_eq!(body[0]["description"], "Details");
        assert_eq!(body[0]["title"], "Second");
    }

    #[tokio::test]
    async fn test_delete_card_reports_missing_list() {
        let app = seeded_app().await;

        let (status, body) = send(
            &app,
            Method::DELETE,
            "/cards",
            Some(json!({ "board_id": 1, "list_id": 999, "card_id": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "list 999 not found in board 1");
    }

    #[tokio::test]
    async fn test_update_card_requires_ids() {
        let app = seeded_app().await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/cards",
            Some(json!({ "board_id": 1, "list_id": 1, "title": "New" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "card id is required");
    }
}
