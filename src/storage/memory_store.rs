use std::sync::Mutex;

use super::Repository;
use crate::entity::{Task, TaskDraft, TaskUpdate};
use crate::error::{CrudError, Result};

const NOT_FOUND: &str = "Task not found";

#[derive(Debug)]
struct TaskList {
    tasks: Vec<Task>,
    next_id: i64,
}

/// In-process task storage.
///
/// The list and the id counter sit behind one lock, so concurrent handlers
/// never observe a half-applied create or hand out the same id twice. Ids
/// start at 1 and are never reused.
#[derive(Debug)]
pub struct MemoryTaskStore {
    inner: Mutex<TaskList>,
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TaskList {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Repository for MemoryTaskStore {
    type Entity = Task;
    type Draft = TaskDraft;
    type Patch = TaskUpdate;

    fn list(&self) -> Result<Vec<Task>> {
        let inner = self.inner.lock()?;
        Ok(inner.tasks.clone())
    }

    fn create(&self, draft: TaskDraft) -> Result<Task> {
        let mut inner = self.inner.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let task = draft.into_task(id);
        inner.tasks.push(task.clone());
        Ok(task)
    }

    fn update(&self, id: i64, patch: TaskUpdate) -> Result<Task> {
        let mut inner = self.inner.lock()?;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CrudError::NotFound(NOT_FOUND.to_string()))?;

        patch.apply(task);
        Ok(task.clone())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.lock()?;
        let pos = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CrudError::NotFound(NOT_FOUND.to_string()))?;

        // Vec::remove shifts the tail, keeping insertion order.
        inner.tasks.remove(pos);
        Ok(())
    }
}
