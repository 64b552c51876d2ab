//! HTTP server implementation for the to-do list.
//!
//! Four handlers translate HTTP verbs into store operations. Each one is
//! a read-modify-write cycle over the whole document: load the list,
//! apply a list operation, write the list back. There is no locking
//! around the cycle; concurrent requests race and the last save wins.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::templates;
use crate::error::ApiError;
use crate::store::TaskStore;
use crate::types::{NewTask, Task};

/// Server state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The task store; the only stateful element in the system.
    store: Arc<dyn TaskStore>,
}

impl AppState {
    /// Create server state over the given store.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Get the store reference.
    pub fn store(&self) -> &Arc<dyn TaskStore> {
        &self.store
    }
}

/// Envelope for the full task list.
#[derive(serde::Serialize)]
struct TaskListResponse {
    tasks: Vec<Task>,
}

/// Envelope for create and replace results.
#[derive(serde::Serialize)]
struct TaskMutationResponse {
    message: &'static str,
    data: Task,
}

/// Envelope for delete results.
#[derive(serde::Serialize)]
struct TaskDeletedResponse {
    message: &'static str,
    id: String,
}

/// Request body for delete.
#[derive(serde::Deserialize)]
struct DeleteRequest {
    #[serde(default)]
    id: String,
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Root endpoint - serves the to-do list page.
async fn root() -> Html<&'static str> {
    Html(templates::INDEX_TEMPLATE)
}

/// `GET /api/task` - return the full task list.
async fn list_tasks(State(state): State<AppState>) -> Json<TaskListResponse> {
    let tasks = state.store().load();
    Json(TaskListResponse { tasks })
}

/// `POST /api/task` - append a new record and return it.
///
/// A caller-supplied id wins; the server only generates one when the
/// payload carries none.
async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<NewTask>,
) -> Result<impl IntoResponse, ApiError> {
    let task = payload.into_task();
    let mut tasks = state.store().load();
    tasks.push(task.clone());
    state.store().save(&tasks)?;

    Ok((
        StatusCode::CREATED,
        Json(TaskMutationResponse {
            message: "Task created",
            data: task,
        }),
    ))
}

/// `PUT /api/task` - replace the record with a matching id wholesale.
///
/// An unknown id matches nothing: the list is rewritten unchanged and
/// the call still succeeds. The response echoes the payload rather than
/// re-reading the store; the two cannot diverge because replacement is
/// whole-record.
async fn replace_task(
    State(state): State<AppState>,
    Json(payload): Json<Task>,
) -> Result<Json<TaskMutationResponse>, ApiError> {
    let tasks: Vec<Task> = state
        .store()
        .load()
        .into_iter()
        .map(|t| if t.id == payload.id { payload.clone() } else { t })
        .collect();
    state.store().save(&tasks)?;

    Ok(Json(TaskMutationResponse {
        message: "Task updated",
        data: payload,
    }))
}

/// `DELETE /api/task` - remove any record with a matching id.
///
/// An unknown id removes nothing and still succeeds.
async fn delete_task(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> Result<Json<TaskDeletedResponse>, ApiError> {
    let mut tasks = state.store().load();
    tasks.retain(|t| t.id != payload.id);
    state.store().save(&tasks)?;

    Ok(Json(TaskDeletedResponse {
        message: "Task deleted",
        id: payload.id,
    }))
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    // Configure CORS for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route(
            "/api/task",
            get(list_tasks)
                .post(create_task)
                .put(replace_task)
                .delete(delete_task),
        )
        .route("/api/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the specified port.
///
/// Returns a oneshot sender that can be used to signal shutdown, and the
/// actual address the server is bound to. Pass port 0 to bind a free
/// ephemeral port (used by the integration tests).
pub async fn start_server(
    store: Arc<dyn TaskStore>,
    port: u16,
) -> anyhow::Result<(oneshot::Sender<()>, SocketAddr)> {
    let state = AppState::new(store);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("To-do server listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("To-do server shutting down");
            })
            .await
        {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok((shutdown_tx, bound_addr))
}
