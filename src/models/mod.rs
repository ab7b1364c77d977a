pub mod member;
pub mod remote;
pub mod team;

// Re-export commonly used types
pub use member::Member;
pub use remote::{RemoteMember, RemoteTeam};
pub use team::{SortKey, Team};

pub type TeamId = i64;
pub type MemberId = i64;
