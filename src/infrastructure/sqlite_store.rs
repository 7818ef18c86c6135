use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqlitePoolOptions, SqliteRow},
    Pool, Row, Sqlite,
};

use crate::domain::{
    store::TaskStore,
    task::{Lookup, NewTask, Task, TaskId},
};

#[derive(Clone)]
pub struct SqliteTaskStore {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTaskStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>> {
        let row = sqlx::query("SELECT id, title, completed FROM tasks WHERE id = ?1")
            .bind(id.0)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.map(row_to_task))
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, input: NewTask) -> Result<Task> {
        let result = sqlx::query("INSERT INTO tasks (title, completed) VALUES (?1, ?2)")
            .bind(&input.title)
            .bind(input.completed)
            .execute(&*self.pool)
            .await?;
        let id = TaskId(result.last_insert_rowid());
        Ok(Task { id, title: input.title, completed: input.completed })
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query("SELECT id, title, completed FROM tasks ORDER BY id")
            .fetch_all(&*self.pool)
            .await?;
        Ok(rows.into_iter().map(row_to_task).collect())
    }

    async fn delete(&self, id: TaskId) -> Result<Lookup> {
        // Fetch first so the caller gets the row's prior state back.
        let Some(task) = self.get(id).await? else { return Ok(Lookup::NotFound) };
        sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id.0)
            .execute(&*self.pool)
            .await?;
        Ok(Lookup::Found(task))
    }

    async fn toggle(&self, id: TaskId) -> Result<Lookup> {
        let Some(mut task) = self.get(id).await? else { return Ok(Lookup::NotFound) };
        task.completed = !task.completed;
        sqlx::query("UPDATE tasks SET completed = ?2 WHERE id = ?1")
            .bind(id.0)
            .bind(task.completed)
            .execute(&*self.pool)
            .await?;
        Ok(Lookup::Found(task))
    }
}

fn row_to_task(row: SqliteRow) -> Task {
    let id: i64 = row.get("id");
    let title: String = row.get("title");
    let completed: bool = row.get("completed");
    Task { id: TaskId(id), title, completed }
}
