pub mod calc;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod server;
pub mod storage;

pub use config::ServerConfig;
pub use error::{CrudError, Result};
pub use storage::{MemoryTaskStore, Repository, SqliteNoteStore};
