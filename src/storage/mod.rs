//! Persistence for the single entity type a service manages.
//!
//! Handlers only talk to [`Repository`]; whether rows live in SQLite or in a
//! process-local list is decided when the service is started.

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryTaskStore;
pub use sqlite_store::SqliteNoteStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::entity::Validate;
use crate::error::Result;

/// Create/read/update/delete over one entity type.
///
/// Calls are synchronous and self-contained: each one is a single storage
/// operation and no state is held between calls.
pub trait Repository: Send + Sync + 'static {
    /// Stored record, including its id.
    type Entity: Serialize + Send + 'static;
    /// Payload accepted on create.
    type Draft: DeserializeOwned + Validate + Send + 'static;
    /// Payload accepted on update.
    type Patch: DeserializeOwned + Validate + Send + 'static;

    /// All live entities.
    fn list(&self) -> Result<Vec<Self::Entity>>;

    /// Assign a fresh id, persist, and return the stored entity.
    fn create(&self, draft: Self::Draft) -> Result<Self::Entity>;

    /// Overwrite an existing entity. Fails with `NotFound` for unknown ids.
    fn update(&self, id: i64, patch: Self::Patch) -> Result<Self::Entity>;

    /// Remove an existing entity. Fails with `NotFound` for unknown ids.
    fn delete(&self, id: i64) -> Result<()>;
}
