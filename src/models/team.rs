use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{MemberId, TeamId};
use crate::error::RosterError;
use crate::roster_error;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub title: String,
    pub body: String,
    /// Assignment order, no duplicates.
    #[serde(rename = "assignedMemberIds", default)]
    pub assigned_member_ids: Vec<MemberId>,
}

impl Team {
    pub fn new(id: TeamId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            assigned_member_ids: Vec::new(),
        }
    }

    pub fn has_member(&self, member_id: MemberId) -> bool {
        self.assigned_member_ids.contains(&member_id)
    }

    /// The relation as the remote dashboard stringified it: ids joined by commas.
    pub fn joined_member_ids(&self) -> String {
        self.assigned_member_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// The Team field the page is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Id,
    #[default]
    Title,
    Body,
    AssignedMemberIds,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Body => "body",
            SortKey::AssignedMemberIds => "assignedMemberIds",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "name",
            SortKey::Body => "description",
            SortKey::AssignedMemberIds => "member count",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "title" => Ok(SortKey::Title),
            "body" => Ok(SortKey::Body),
            "assignedMemberIds" | "members" => Ok(SortKey::AssignedMemberIds),
            other => Err(roster_error!(
                InvalidInput,
                "Unknown sort key '{}'. Use id, title, body or members.",
                other
            )),
        }
    }
}
