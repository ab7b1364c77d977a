use std::path::Path;

use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContext;
use crate::config::{config_path, load_config_from, save_config_to, Config};
use crate::error::RosterResult;
use crate::store::AssignedOrdering;

pub fn handle_config(context: &mut CliContext, matches: &ArgMatches) -> RosterResult<()> {
    update_config(context, &config_path()?, matches)
}

/// Edit the config file at `path`.
///
/// The file is re-read rather than taken from the context, whose config
/// already carries environment overrides that must not be written back.
pub fn update_config(context: &mut CliContext, path: &Path, matches: &ArgMatches) -> RosterResult<()> {
    let mut file_config = load_config_from(path);
    let changed = apply_changes(&mut file_config, matches);

    if changed {
        save_config_to(&file_config, path)?;

        let mut effective = context.config().clone();
        apply_changes(&mut effective, matches);
        context.replace_config(effective);
        println!("{}", "Configuration saved.".green());
    }

    if matches.get_flag("show") || !changed {
        let current = context.config();
        println!("Config file:     {}", path.display());
        println!("Teams URL:       {}", current.teams_url);
        println!("Members URL:     {}", current.members_url);
        println!("Member ordering: {:?}", current.assigned_ordering);
    }

    Ok(())
}

fn apply_changes(config: &mut Config, matches: &ArgMatches) -> bool {
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("teams-url") {
        config.teams_url = url.clone();
        changed = true;
    }
    if let Some(url) = matches.get_one::<String>("members-url") {
        config.members_url = url.clone();
        changed = true;
    }
    if let Some(ordering) = matches.get_one::<String>("member-ordering") {
        config.assigned_ordering = match ordering.as_str() {
            "count" => AssignedOrdering::ByCount,
            _ => AssignedOrdering::Literal,
        };
        changed = true;
    }

    changed
}
