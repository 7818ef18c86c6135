use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::application::task_service::TaskService;
use crate::domain::task::{Lookup, TaskId};
use crate::http::{render, types::AppError};

#[derive(Clone)]
pub struct AppState<S: TaskService> { pub service: S }

pub fn router<S: TaskService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(index::<S>))
        .route("/add", post(add_task::<S>))
        .route("/delete/:id", post(delete_task::<S>))
        .route("/toggle/:id", post(toggle_task::<S>))
        .with_state(state)
}

async fn index<S: TaskService>(State(state): State<AppState<S>>) -> Result<Html<String>, AppError> {
    let tasks = state.service.list().await?;
    tracing::info!(count = tasks.len(), "fetched all tasks");
    Ok(Html(render::page(&tasks)))
}

#[derive(Deserialize)]
struct AddTask {
    #[serde(default)]
    title: String,
}

async fn add_task<S: TaskService>(
    State(state): State<AppState<S>>,
    Form(form): Form<AddTask>,
) -> Result<Html<String>, AppError> {
    if form.title.is_empty() {
        tracing::warn!("attempted to add a task with an empty title");
    } else {
        let task = state.service.add(&form.title).await?;
        tracing::info!(id = task.id.0, title = %task.title, "added task");
    }
    render_list(&state).await
}

async fn delete_task<S: TaskService>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    match state.service.remove(TaskId(id)).await? {
        Lookup::Found(task) => tracing::info!(id, title = %task.title, "deleted task"),
        Lookup::NotFound => tracing::warn!(id, "attempted to delete a non-existent task"),
    }
    render_list(&state).await
}

async fn toggle_task<S: TaskService>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    match state.service.toggle(TaskId(id)).await? {
        Lookup::Found(task) => tracing::info!(id, completed = task.completed, "toggled task"),
        Lookup::NotFound => tracing::warn!(id, "attempted to toggle a non-existent task"),
    }
    render_list(&state).await
}

// Every mutation responds with the list re-queried from the store, so the
// client always sees the committed state.
async fn render_list<S: TaskService>(state: &AppState<S>) -> Result<Html<String>, AppError> {
    let tasks = state.service.list().await?;
    Ok(Html(render::fragment(&tasks)))
}
