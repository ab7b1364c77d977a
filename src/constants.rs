pub const DEFAULT_TEAMS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_MEMBERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const CONFIG_FILE: &str = ".roster-config.json";

pub const TEAMS_URL_ENV: &str = "ROSTER_TEAMS_URL";
pub const MEMBERS_URL_ENV: &str = "ROSTER_MEMBERS_URL";

/// Number of teams shown per page, for every sort order.
pub const PAGE_SIZE: usize = 5;

// Event loop tick in milliseconds
pub const TICK_RATE_MS: u64 = 100;
