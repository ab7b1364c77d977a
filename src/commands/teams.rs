use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::RosterResult;
use crate::formatting::print_team_page;
use crate::roster_error;
use crate::models::SortKey;
use crate::store::AssignedOrdering;

pub async fn handle_teams(context: &mut CliContext, matches: &ArgMatches) -> RosterResult<()> {
    let sort: SortKey = matches
        .get_one::<String>("sort")
        .map(|s| s.parse::<SortKey>())
        .transpose()?
        .unwrap_or_default();
    let page = matches.get_one::<usize>("page").copied().unwrap_or(1);
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("list");

    if page == 0 {
        return Err(roster_error!(InvalidInput, "Pages start at 1"));
    }

    let mut store = context.loaded_store().await?;
    if matches.get_flag("by-count") {
        store.set_assigned_ordering(AssignedOrdering::ByCount);
    }
    store.set_sort_by(sort);
    store.set_current_page(page);

    if page > store.total_pages().max(1) {
        return Err(roster_error!(
            InvalidInput,
            "Page {} is past the last page ({})",
            page,
            store.total_pages()
        ));
    }

    print_team_page(&store, format)
}
