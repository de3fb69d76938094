use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};

use crate::calc::{Calculation, History};
use crate::config::ServerConfig;
use crate::error::{CrudError, Result};
use crate::server;
use crate::storage::{MemoryTaskStore, SqliteNoteStore};

const CALC_USAGE: &str = "Usage: crudbox calc <num1> <op> <num2>";

pub fn handle_notes(db: PathBuf, bind: SocketAddr) -> Result<()> {
    let config = ServerConfig::new(bind).with_db_path(db);
    let store = SqliteNoteStore::open(&config.db_path)?;
    info!(db = %config.db_path.display(), "database ready");

    run_server(server::router(Arc::new(store)), &config)
}

pub fn handle_tasks(bind: SocketAddr) -> Result<()> {
    let config = ServerConfig::new(bind);
    run_server(server::router(Arc::new(MemoryTaskStore::new())), &config)
}

pub fn handle_calc(args: Vec<String>, history: PathBuf) -> Result<()> {
    let history = History::new(history);

    match args.as_slice() {
        [cmd] if cmd == "history" => {
            match history.read()? {
                Some(contents) => print!("{}", contents),
                None => println!("No history found"),
            }
            Ok(())
        }
        [lhs, op, rhs] => {
            let calc = Calculation::parse(lhs, op, rhs)?;
            println!("Result: {}", calc.result);

            // The result is already out; a failed log write only warns.
            if let Err(e) = history.append(&calc) {
                warn!(path = %history.path().display(), error = %e, "could not write history");
                eprintln!("Could not write history: {}", e);
            }
            Ok(())
        }
        _ => Err(CrudError::BadRequest(CALC_USAGE.to_string())),
    }
}

fn run_server(app: Router, config: &ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(app, config))
}
