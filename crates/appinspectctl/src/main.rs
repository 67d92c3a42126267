//! appinspectctl - console front end for application reports

use appinspectctl::cli::{Cli, Commands};
use appinspectctl::{commands, errors, logging};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    logging::init();

    let result = match cli.command {
        Commands::DebugApp { json } => commands::debug_app::execute(
            cli.config.as_deref(),
            cli.manifest.as_deref(),
            cli.no_color,
            json,
        ),
    };

    match result {
        Ok(()) => std::process::exit(errors::EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(errors::exit_code(&e));
        }
    }
}
