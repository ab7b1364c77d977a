use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("roster")
        .about("Roster - sort, page through and staff teams from a remote roster API")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("dashboard")
                .about("Open the interactive team dashboard (default)")
        )
        .subcommand(
            Command::new("teams")
                .about("Print one page of teams")
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .short('s')
                        .value_name("KEY")
                        .help("Sort key: id, title, body or members")
                        .default_value("title")
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .short('p')
                        .value_name("N")
                        .help("Page number, starting at 1")
                        .value_parser(value_parser!(usize))
                        .default_value("1")
                )
                .arg(
                    Arg::new("by-count")
                        .long("by-count")
                        .help("Order the members sort by number of members instead of literal id lists")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format")
                        .value_parser(["list", "table", "json"])
                        .default_value("list")
                )
        )
        .subcommand(
            Command::new("members")
                .about("List every member")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format")
                        .value_parser(["list", "json"])
                        .default_value("list")
                )
        )
        .subcommand(
            Command::new("config")
                .about("Show or change the roster endpoints")
                .arg(
                    Arg::new("teams-url")
                        .long("teams-url")
                        .value_name("URL")
                        .help("Endpoint returning the team records")
                )
                .arg(
                    Arg::new("members-url")
                        .long("members-url")
                        .value_name("URL")
                        .help("Endpoint returning the member records")
                )
                .arg(
                    Arg::new("member-ordering")
                        .long("member-ordering")
                        .value_name("MODE")
                        .help("How the members sort compares teams")
                        .value_parser(["literal", "count"])
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(ArgAction::SetTrue)
                )
        )
}
