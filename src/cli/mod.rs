mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{handle_calc, handle_notes, handle_tasks};
