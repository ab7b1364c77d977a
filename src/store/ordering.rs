use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{SortKey, Team};

/// How the `assignedMemberIds` sort key compares two teams.
///
/// `Literal` orders by the comma-joined id string, which is what the remote
/// dashboard's `>` comparison on arrays produced (so `[10]` sorts before
/// `[9]` and an empty roster sorts first). `ByCount` orders by how many
/// members are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignedOrdering {
    #[default]
    Literal,
    ByCount,
}

/// Total order over teams for `key`. Equal keys compare `Equal` so a stable
/// sort keeps collection order for ties.
pub fn compare_teams(a: &Team, b: &Team, key: SortKey, assigned: AssignedOrdering) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Body => a.body.cmp(&b.body),
        SortKey::AssignedMemberIds => match assigned {
            AssignedOrdering::Literal => a.joined_member_ids().cmp(&b.joined_member_ids()),
            AssignedOrdering::ByCount => a
                .assigned_member_ids
                .len()
                .cmp(&b.assigned_member_ids.len()),
        },
    }
}
