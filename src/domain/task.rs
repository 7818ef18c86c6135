use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaskId(pub i64);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub completed: bool,
}

/// Outcome of a by-id mutation. `NotFound` is a normal result, not an
/// error; it must never be conflated with a zero-value `Task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Task),
    NotFound,
}

impl Lookup {
    pub fn found(self) -> Option<Task> {
        match self {
            Lookup::Found(task) => Some(task),
            Lookup::NotFound => None,
        }
    }
}
