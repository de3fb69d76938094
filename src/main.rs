use clap::Parser;
use crudbox::cli::{handle_calc, handle_notes, handle_tasks, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    crudbox::logging::init();

    let result = match cli.command {
        Commands::Notes { db, bind } => handle_notes(db, bind),
        Commands::Tasks { bind } => handle_tasks(bind),
        Commands::Calc { args, history } => handle_calc(args, history),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
