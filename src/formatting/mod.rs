pub mod roster;
pub mod utils;

pub use roster::{print_members, print_team_page};
pub use utils::{extract_first_name, single_line, truncate};
