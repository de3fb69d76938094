// src/entity/note.rs
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::error::{CrudError, Result};

/// A stored note, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Body of `POST /notes`. Missing fields decode as empty and are then
/// rejected by [`Validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Validate for NoteDraft {
    fn validate(&self) -> Result<()> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(CrudError::BadRequest(
                "Missing title or content".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body of `PUT /notes/{id}`. Notes are overwritten as a whole, so an
/// absent field becomes an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteUpdate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Validate for NoteUpdate {}

impl NoteUpdate {
    pub fn into_note(self, id: i64) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
        }
    }
}
