use async_trait::async_trait;

use crate::error::RosterResult;
use crate::models::{Member, Team};

/// Where the store pulls its two collections from.
///
/// The two calls are independent and may be awaited concurrently.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn fetch_teams(&self) -> RosterResult<Vec<Team>>;

    async fn fetch_members(&self) -> RosterResult<Vec<Member>>;
}
