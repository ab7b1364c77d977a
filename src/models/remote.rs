//! Wire shapes of the two remote collections.
//!
//! Only the fields the roster needs are declared; serde ignores the rest.
//! A record missing one of them, or carrying the wrong type, fails the whole
//! payload with a `DecodeError` instead of leaking an empty value into the UI.

use serde::Deserialize;

use super::{Member, MemberId, Team, TeamId};
use crate::error::{RosterError, RosterResult};

/// A "post-like" record from the teams endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteTeam {
    pub id: TeamId,
    pub title: String,
    pub body: String,
}

/// A "user-like" record from the members endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteMember {
    pub id: MemberId,
    pub name: String,
    pub email: String,
}

impl From<RemoteTeam> for Team {
    fn from(remote: RemoteTeam) -> Self {
        Team::new(remote.id, remote.title, remote.body)
    }
}

impl From<RemoteMember> for Member {
    fn from(remote: RemoteMember) -> Self {
        Member {
            id: remote.id,
            name: remote.name,
            email: remote.email,
        }
    }
}

pub fn decode_teams(payload: &str) -> RosterResult<Vec<Team>> {
    let records: Vec<RemoteTeam> = serde_json::from_str(payload)
        .map_err(|e| RosterError::DecodeError(format!("teams payload: {}", e)))?;
    Ok(records.into_iter().map(Team::from).collect())
}

pub fn decode_members(payload: &str) -> RosterResult<Vec<Member>> {
    let records: Vec<RemoteMember> = serde_json::from_str(payload)
        .map_err(|e| RosterError::DecodeError(format!("members payload: {}", e)))?;
    Ok(records.into_iter().map(Member::from).collect())
}
