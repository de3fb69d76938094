use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::{params, Connection};
use tracing::debug;

use super::Repository;
use crate::entity::{Note, NoteDraft, NoteUpdate};
use crate::error::{CrudError, Result};

const NOT_FOUND: &str = "Note not found";

/// SQLite-backed note storage
pub struct SqliteNoteStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteNoteStore {
    /// Open or create the notes database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        debug!(path = %path.display(), "notes database ready");

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a throwaway database that lives as long as the store
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Location of the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl Repository for SqliteNoteStore {
    type Entity = Note;
    type Draft = NoteDraft;
    type Patch = NoteUpdate;

    fn list(&self) -> Result<Vec<Note>> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT id, title, content FROM notes")?;

        let notes = stmt
            .query_map([], |row| {
                Ok(Note {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    content: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(notes)
    }

    fn create(&self, draft: NoteDraft) -> Result<Note> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT INTO notes (title, content) VALUES (?1, ?2)",
            params![draft.title, draft.content],
        )?;

        Ok(Note {
            id: conn.last_insert_rowid(),
            title: draft.title,
            content: draft.content,
        })
    }

    fn update(&self, id: i64, patch: NoteUpdate) -> Result<Note> {
        let conn = self.conn.lock()?;
        let changed = conn.execute(
            "UPDATE notes SET title = ?1, content = ?2 WHERE id = ?3",
            params![patch.title, patch.content, id],
        )?;

        // Zero affected rows is the existence check.
        if changed == 0 {
            return Err(CrudError::NotFound(NOT_FOUND.to_string()));
        }

        Ok(patch.into_note(id))
    }

    fn delete(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock()?;
        let changed = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;

        if changed == 0 {
            return Err(CrudError::NotFound(NOT_FOUND.to_string()));
        }
        Ok(())
    }
}

impl From<rusqlite::Error> for CrudError {
    fn from(e: rusqlite::Error) -> Self {
        CrudError::Storage(format!("SQLite error: {}", e))
    }
}
