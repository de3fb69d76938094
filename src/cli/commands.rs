use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_BIND, DEFAULT_HISTORY_FILE, DEFAULT_NOTES_DB};

#[derive(Parser, Debug)]
#[command(name = "crudbox")]
#[command(version, about = "Notes and tasks CRUD services, plus a small calculator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the notes API backed by a SQLite table
    Notes {
        /// SQLite database file, created if missing
        #[arg(long, default_value = DEFAULT_NOTES_DB)]
        db: PathBuf,

        /// Address to listen on
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },

    /// Serve the tasks API backed by an in-memory list
    Tasks {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },

    /// Evaluate `<num1> <op> <num2>`, or print past results with `calc history`
    Calc {
        /// Either `history` or three words: number, operator (+ - * x /), number
        #[arg(value_name = "EXPR", num_args = 1..=3, allow_negative_numbers = true, required = true)]
        args: Vec<String>,

        /// History log file
        #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
        history: PathBuf,
    },
}
