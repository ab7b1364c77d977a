use crate::cli_context::CliContext;
use crate::error::RosterResult;
use crate::interactive::run_dashboard;

pub async fn handle_dashboard(context: &mut CliContext) -> RosterResult<()> {
    run_dashboard(context.config()).await
}
