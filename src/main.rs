use std::process;

use roster_cli::cli::build_cli;
use roster_cli::cli_context::CliContext;
use roster_cli::commands::{config::handle_config, dashboard::handle_dashboard, members::handle_members, teams::handle_teams};
use roster_cli::logging::{init_logging, log_error};

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let mut context = CliContext::load();

    let result = match matches.subcommand() {
        Some(("teams", sub_matches)) => handle_teams(&mut context, sub_matches).await,
        Some(("members", sub_matches)) => handle_members(&mut context, sub_matches).await,
        Some(("config", sub_matches)) => handle_config(&mut context, sub_matches),
        Some(("dashboard", _)) | None => handle_dashboard(&mut context).await,
        _ => {
            eprintln!("Unknown command. Use 'roster --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
