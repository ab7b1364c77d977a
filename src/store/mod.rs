pub mod ordering;
pub mod roster;

pub use ordering::AssignedOrdering;
pub use roster::{LoadState, RosterStore};
