use crate::domain::store::TaskStore;
use crate::domain::task::{Lookup, NewTask, Task, TaskId};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TaskService: Send + Sync + 'static {
    async fn add(&self, title: &str) -> Result<Task>;
    async fn list(&self) -> Result<Vec<Task>>;
    async fn remove(&self, id: TaskId) -> Result<Lookup>;
    async fn toggle(&self, id: TaskId) -> Result<Lookup>;
}

#[derive(Clone)]
pub struct TaskServiceImpl<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskServiceImpl<S> {
    pub fn new(store: S) -> Self { Self { store } }
}

#[async_trait]
impl<S: TaskStore> TaskService for TaskServiceImpl<S> {
    async fn add(&self, title: &str) -> Result<Task> {
        // New tasks always start incomplete; callers guarantee a non-empty title.
        self.store
            .create(NewTask { title: title.to_string(), completed: false })
            .await
    }

    async fn list(&self) -> Result<Vec<Task>> { self.store.list().await }

    async fn remove(&self, id: TaskId) -> Result<Lookup> { self.store.delete(id).await }

    async fn toggle(&self, id: TaskId) -> Result<Lookup> { self.store.toggle(id).await }
}
