use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::RosterResult;
use crate::formatting::print_members;

pub async fn handle_members(context: &mut CliContext, matches: &ArgMatches) -> RosterResult<()> {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("list");

    let store = context.loaded_store().await?;
    print_members(store.all_members(), format)
}
