use async_trait::async_trait;

use super::task::{Lookup, NewTask, Task, TaskId};

#[async_trait]
pub trait TaskStore: Send + Sync + 'static {
    async fn init(&self) -> anyhow::Result<()>;
    async fn create(&self, input: NewTask) -> anyhow::Result<Task>;
    async fn list(&self) -> anyhow::Result<Vec<Task>>;
    async fn delete(&self, id: TaskId) -> anyhow::Result<Lookup>;
    async fn toggle(&self, id: TaskId) -> anyhow::Result<Lookup>;
}
