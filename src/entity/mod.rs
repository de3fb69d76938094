mod note;
mod task;

pub use note::{Note, NoteDraft, NoteUpdate};
pub use task::{Task, TaskDraft, TaskUpdate, DEFAULT_TASK_STATUS};

use crate::error::Result;

/// Checks applied to a request payload before it reaches storage.
///
/// The default accepts everything; payload types with required fields
/// override it and return [`crate::CrudError::BadRequest`].
pub trait Validate {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
