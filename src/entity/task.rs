// src/entity/task.rs
use serde::{Deserialize, Serialize};

use super::Validate;

/// Status given to a task created without one.
pub const DEFAULT_TASK_STATUS: &str = "pending";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub status: String,
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Build the stored task, defaulting an absent or empty status.
    pub fn into_task(self, id: i64) -> Task {
        let status = self
            .status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_TASK_STATUS.to_string());
        Task {
            id,
            title: self.title,
            status,
        }
    }
}

impl Validate for TaskDraft {}

/// Body of `PUT /tasks/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Validate for TaskUpdate {}

impl TaskUpdate {
    /// Overwrite the fields present in the update. Empty strings count as absent.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title.filter(|t| !t.is_empty()) {
            task.title = title;
        }
        if let Some(status) = self.status.filter(|s| !s.is_empty()) {
            task.status = status;
        }
    }
}
