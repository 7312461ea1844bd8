use axum::extract::{Path, State};
use axum::Json;

use todos_core::actions::{self, ActionResult};
use todos_core::todo::Todo;

use crate::error::AppError;
use crate::state::AppState;

/// Generic message for read-endpoint failures. The cause stays in the log.
const FETCH_FAILED: &str = "Failed to fetch todos.";

#[derive(serde::Deserialize)]
pub struct CreateTodoBody {
    pub title: String,
    /// Absent means `false` — creation is the only place with a default.
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(serde::Deserialize)]
pub struct UpdateTodoBody {
    pub title: String,
    pub completed: bool,
}

#[derive(serde::Deserialize)]
pub struct ToggleTodoBody {
    /// The completion state as the caller currently knows it; the action
    /// writes its negation.
    pub completed: bool,
}

/// GET /api/todos — the full collection, newest first.
pub async fn list_todos(State(app): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let store = app.store.clone();
    let todos = tokio::task::spawn_blocking(move || {
        let store = store
            .lock()
            .map_err(|_| anyhow::anyhow!("todo store lock poisoned"))?;
        Ok::<_, anyhow::Error>(store.list_all()?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?
    .map_err(|err| {
        tracing::error!(error = %err, "fetch todos failed");
        AppError::internal(FETCH_FAILED)
    })?;

    Ok(Json(todos))
}

/// POST /api/todos — create a todo from the submitted fields.
pub async fn create_todo(
    State(app): State<AppState>,
    Json(body): Json<CreateTodoBody>,
) -> Result<Json<ActionResult>, AppError> {
    let store = app.store.clone();
    let result = tokio::task::spawn_blocking(move || {
        let store = store
            .lock()
            .map_err(|_| anyhow::anyhow!("todo store lock poisoned"))?;
        Ok::<_, anyhow::Error>(actions::create(&store, &body.title, body.completed))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    if result.success {
        app.notify_refresh();
    }
    Ok(Json(result))
}

/// PUT /api/todos/:id — overwrite title and completion flag.
pub async fn update_todo(
    State(app): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoBody>,
) -> Result<Json<ActionResult>, AppError> {
    let store = app.store.clone();
    let result = tokio::task::spawn_blocking(move || {
        let store = store
            .lock()
            .map_err(|_| anyhow::anyhow!("todo store lock poisoned"))?;
        Ok::<_, anyhow::Error>(actions::update(&store, id, &body.title, body.completed))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    if result.success {
        app.notify_refresh();
    }
    Ok(Json(result))
}

/// DELETE /api/todos/:id — hard delete.
pub async fn delete_todo(
    State(app): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActionResult>, AppError> {
    let store = app.store.clone();
    let result = tokio::task::spawn_blocking(move || {
        let store = store
            .lock()
            .map_err(|_| anyhow::anyhow!("todo store lock poisoned"))?;
        Ok::<_, anyhow::Error>(actions::delete(&store, id))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    if result.success {
        app.notify_refresh();
    }
    Ok(Json(result))
}

/// POST /api/todos/:id/toggle — flip completion, negating the caller's
/// current value.
pub async fn toggle_todo(
    State(app): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ToggleTodoBody>,
) -> Result<Json<ActionResult>, AppError> {
    let store = app.store.clone();
    let result = tokio::task::spawn_blocking(move || {
        let store = store
            .lock()
            .map_err(|_| anyhow::anyhow!("todo store lock poisoned"))?;
        Ok::<_, anyhow::Error>(actions::toggle(&store, id, body.completed))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    if result.success {
        app.notify_refresh();
    }
    Ok(Json(result))
}
