//! Item CRUD handlers: list, create, update, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::api::dto::{CreateItemRequest, UpdateItemRequest};
use crate::app_state::AppState;
use crate::domain::{Item, ItemId};
use crate::error::{BackendError, ErrorResponse};

/// `GET /api/items` — List all items.
///
/// # Errors
///
/// Returns [`BackendError::PersistenceError`] if the store cannot be
/// read.
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Items",
    summary = "List all items",
    description = "Returns every stored item in insertion order.",
    responses(
        (status = 200, description = "All stored items", body = Vec<Item>),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, BackendError> {
    let items = state.todo_service.list_items().await?;
    Ok(Json(items))
}

/// `POST /api/items` — Create a new item.
///
/// # Errors
///
/// Returns [`BackendError::PersistenceError`] if the insert fails.
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Items",
    summary = "Create a new item",
    description = "Stores a new incomplete item and returns it with its generated identifier.",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Created item", body = Item),
        (status = 400, description = "Malformed payload", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let item = state.todo_service.add_item(&req.description).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /api/items/{id}` — Update an item.
///
/// # Errors
///
/// Returns [`BackendError::ItemNotFound`] if the identifier is unknown.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "Items",
    summary = "Update an item",
    description = "Applies a partial update to the item. Omitted fields keep their stored values.",
    params(
        ("id" = uuid::Uuid, Path, description = "Item UUID"),
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, description = "Malformed id or payload", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let item = state
        .todo_service
        .update_item(ItemId::from_uuid(id), req.into())
        .await?;
    Ok(Json(item))
}

/// `DELETE /api/items/{id}` — Remove an item.
///
/// # Errors
///
/// Returns [`BackendError::ItemNotFound`] if the identifier is unknown.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "Items",
    summary = "Delete an item",
    description = "Removes the item with the given identifier.",
    params(
        ("id" = uuid::Uuid, Path, description = "Item UUID"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, BackendError> {
    state.todo_service.delete_item(ItemId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Item collection routes, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, header};
    use tower::ServiceExt;

    use super::*;
    use crate::lifecycle::Lifecycle;
    use crate::observability::ApiMetrics;
    use crate::persistence::InMemoryItemStore;
    use crate::service::TodoService;

    fn make_app() -> Router {
        let Ok(metrics) = ApiMetrics::new() else {
            panic!("metrics creation failed");
        };
        let state = AppState {
            todo_service: Arc::new(TodoService::new(Arc::new(InMemoryItemStore::new()))),
            metrics: Arc::new(metrics),
            lifecycle: Arc::new(Lifecycle::new()),
        };
        Router::new().nest("/api", routes()).with_state(state)
    }

    fn make_request(method: Method, path: &str, body: Option<&serde_json::Value>) -> axum::http::Request<Body> {
        let builder = axum::http::Request::builder().method(method).uri(path);
        let result = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = result else {
            panic!("request construction failed");
        };
        request
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(value) = serde_json::from_slice(&bytes) else {
            panic!("body is not JSON");
        };
        value
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let app = make_app();

        let Ok(response) = app.oneshot(make_request(Method::GET, "/api/items", None)).await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn post_creates_item_then_get_returns_it() {
        let app = make_app();

        let payload = serde_json::json!({"description": "buy milk"});
        let Ok(response) = app
            .clone()
            .oneshot(make_request(Method::POST, "/api/items", Some(&payload)))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = read_json(response).await;
        assert_eq!(
            created.get("description").and_then(|v| v.as_str()),
            Some("buy milk")
        );
        assert_eq!(created.get("completed").and_then(|v| v.as_bool()), Some(false));
        let Some(id) = created.get("id").and_then(|v| v.as_str()) else {
            panic!("created item has no id");
        };
        assert!(uuid::Uuid::parse_str(id).is_ok());

        let Ok(response) = app.oneshot(make_request(Method::GET, "/api/items", None)).await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let listed = read_json(response).await;
        let Some(items) = listed.as_array() else {
            panic!("list is not an array");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(
            items.first().and_then(|i| i.get("id")).and_then(|v| v.as_str()),
            Some(id)
        );
    }

    #[tokio::test]
    async fn put_merges_only_submitted_fields() {
        let app = make_app();

        let payload = serde_json::json!({"description": "buy milk"});
        let Ok(response) = app
            .clone()
            .oneshot(make_request(Method::POST, "/api/items", Some(&payload)))
            .await
        else {
            panic!("request failed");
        };
        let created = read_json(response).await;
        let Some(id) = created.get("id").and_then(|v| v.as_str()) else {
            panic!("created item has no id");
        };

        let patch = serde_json::json!({"completed": true});
        let Ok(response) = app
            .oneshot(make_request(
                Method::PUT,
                &format!("/api/items/{id}"),
                Some(&patch),
            ))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let updated = read_json(response).await;
        assert_eq!(updated.get("completed").and_then(|v| v.as_bool()), Some(true));
        assert_eq!(
            updated.get("description").and_then(|v| v.as_str()),
            Some("buy milk")
        );
    }

    #[tokio::test]
    async fn put_unknown_id_returns_404_and_leaves_collection_unchanged() {
        let app = make_app();

        let payload = serde_json::json!({"description": "buy milk"});
        let Ok(_) = app
            .clone()
            .oneshot(make_request(Method::POST, "/api/items", Some(&payload)))
            .await
        else {
            panic!("request failed");
        };

        let missing = uuid::Uuid::new_v4();
        let patch = serde_json::json!({"completed": true});
        let Ok(response) = app
            .clone()
            .oneshot(make_request(
                Method::PUT,
                &format!("/api/items/{missing}"),
                Some(&patch),
            ))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error = read_json(response).await;
        assert_eq!(
            error
                .get("error")
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_i64()),
            Some(2001)
        );

        let Ok(response) = app.oneshot(make_request(Method::GET, "/api/items", None)).await
        else {
            panic!("request failed");
        };
        let listed = read_json(response).await;
        let Some(items) = listed.as_array() else {
            panic!("list is not an array");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(
            items
                .first()
                .and_then(|i| i.get("completed"))
                .and_then(|v| v.as_bool()),
            Some(false)
        );
    }

    #[tokio::test]
    async fn delete_returns_204_and_removes_item() {
        let app = make_app();

        let payload = serde_json::json!({"description": "buy milk"});
        let Ok(response) = app
            .clone()
            .oneshot(make_request(Method::POST, "/api/items", Some(&payload)))
            .await
        else {
            panic!("request failed");
        };
        let created = read_json(response).await;
        let Some(id) = created.get("id").and_then(|v| v.as_str()) else {
            panic!("created item has no id");
        };

        let Ok(response) = app
            .clone()
            .oneshot(make_request(
                Method::DELETE,
                &format!("/api/items/{id}"),
                None,
            ))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let Ok(response) = app.oneshot(make_request(Method::GET, "/api/items", None)).await
        else {
            panic!("request failed");
        };
        let listed = read_json(response).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_404_and_leaves_collection_unchanged() {
        let app = make_app();

        let payload = serde_json::json!({"description": "buy milk"});
        let Ok(_) = app
            .clone()
            .oneshot(make_request(Method::POST, "/api/items", Some(&payload)))
            .await
        else {
            panic!("request failed");
        };

        let missing = uuid::Uuid::new_v4();
        let Ok(response) = app
            .clone()
            .oneshot(make_request(
                Method::DELETE,
                &format!("/api/items/{missing}"),
                None,
            ))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let Ok(response) = app.oneshot(make_request(Method::GET, "/api/items", None)).await
        else {
            panic!("request failed");
        };
        let listed = read_json(response).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn post_with_invalid_json_returns_400() {
        let app = make_app();

        let Ok(request) = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/api/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
        else {
            panic!("request construction failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn post_missing_description_returns_422() {
        let app = make_app();

        let payload = serde_json::json!({"text": "wrong field"});
        let Ok(response) = app
            .oneshot(make_request(Method::POST, "/api/items", Some(&payload)))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn put_with_non_uuid_id_returns_400() {
        let app = make_app();

        let patch = serde_json::json!({"completed": true});
        let Ok(response) = app
            .oneshot(make_request(
                Method::PUT,
                "/api/items/not-a-uuid",
                Some(&patch),
            ))
            .await
        else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
