pub mod roster_client;
pub mod source;

pub use roster_client::RosterClient;
pub use source::RosterSource;
