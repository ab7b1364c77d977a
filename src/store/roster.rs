use super::ordering::{compare_teams, AssignedOrdering};
use crate::client::RosterSource;
use crate::constants::PAGE_SIZE;
use crate::error::RosterResult;
use crate::logging::{log_debug, log_error, log_info};
use crate::models::{Member, MemberId, SortKey, Team, TeamId};

/// Progress of the one load a session performs
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    /// At least one fetch failed; the message is the first failure.
    Failed(String),
}

/// Single source of truth for teams, members and the assignment relation.
///
/// Sorted and paginated views are recomputed from scratch on every read.
#[derive(Debug)]
pub struct RosterStore {
    teams: Vec<Team>,
    members: Vec<Member>,
    sort_by: SortKey,
    assigned_ordering: AssignedOrdering,
    current_page: usize,
    load_state: LoadState,
    teams_pending: bool,
    members_pending: bool,
    first_error: Option<String>,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            members: Vec::new(),
            sort_by: SortKey::default(),
            assigned_ordering: AssignedOrdering::default(),
            current_page: 1,
            load_state: LoadState::Idle,
            teams_pending: false,
            members_pending: false,
            first_error: None,
        }
    }

    /// Build an already-populated store, skipping the network.
    pub fn with_data(teams: Vec<Team>, members: Vec<Member>) -> Self {
        Self {
            teams,
            members,
            load_state: LoadState::Ready,
            ..Self::new()
        }
    }

    // ----- Loading -----

    /// Fetch both collections once. Later calls are no-ops.
    ///
    /// A failed fetch leaves its collection untouched; the other one is still
    /// applied. The first error is returned after both have settled.
    pub async fn load<S>(&mut self, source: &S) -> RosterResult<()>
    where
        S: RosterSource + ?Sized,
    {
        if !self.begin_load() {
            return Ok(());
        }

        let (teams, members) = tokio::join!(source.fetch_teams(), source.fetch_members());

        let teams = self.finish_teams(teams);
        let members = self.finish_members(members);
        teams.and(members)
    }

    /// Move from `Idle` to `Loading`. Returns false if a load already started.
    pub fn begin_load(&mut self) -> bool {
        if self.load_state != LoadState::Idle {
            log_debug("Load requested again, ignoring");
            return false;
        }

        log_info("Loading teams and members");
        self.load_state = LoadState::Loading;
        self.teams_pending = true;
        self.members_pending = true;
        true
    }

    pub fn finish_teams(&mut self, result: RosterResult<Vec<Team>>) -> RosterResult<()> {
        if !self.teams_pending {
            log_debug("Teams arrived outside of a load, ignoring");
            return Ok(());
        }
        self.teams_pending = false;

        let outcome = match result {
            Ok(teams) => {
                log_info(&format!("Loaded {} teams", teams.len()));
                self.teams = teams;
                Ok(())
            }
            Err(e) => {
                self.record_failure("teams", &e.to_string());
                Err(e)
            }
        };
        self.settle();
        outcome
    }

    pub fn finish_members(&mut self, result: RosterResult<Vec<Member>>) -> RosterResult<()> {
        if !self.members_pending {
            log_debug("Members arrived outside of a load, ignoring");
            return Ok(());
        }
        self.members_pending = false;

        let outcome = match result {
            Ok(members) => {
                log_info(&format!("Loaded {} members", members.len()));
                self.members = members;
                Ok(())
            }
            Err(e) => {
                self.record_failure("members", &e.to_string());
                Err(e)
            }
        };
        self.settle();
        outcome
    }

    fn record_failure(&mut self, what: &str, message: &str) {
        log_error(&format!("Failed to load {}: {}", what, message));
        if self.first_error.is_none() {
            self.first_error = Some(format!("Failed to load {}: {}", what, message));
        }
    }

    fn settle(&mut self) {
        if self.teams_pending || self.members_pending {
            return;
        }
        self.load_state = match self.first_error.clone() {
            Some(message) => LoadState::Failed(message),
            None => LoadState::Ready,
        };
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    // ----- Relation mutations -----

    /// Append `member_id` to the team's roster unless it is already there.
    pub fn assign_member_to_team(&mut self, team_id: TeamId, member_id: MemberId) {
        let mut found = false;
        for team in self.teams.iter_mut().filter(|t| t.id == team_id) {
            found = true;
            if !team.has_member(member_id) {
                team.assigned_member_ids.push(member_id);
                log_debug(&format!("Assigned member {} to team {}", member_id, team_id));
            }
        }
        if !found {
            log_debug(&format!("Assign to unknown team {} ignored", team_id));
        }
    }

    pub fn remove_member_from_team(&mut self, team_id: TeamId, member_id: MemberId) {
        for team in self.teams.iter_mut().filter(|t| t.id == team_id) {
            let before = team.assigned_member_ids.len();
            team.assigned_member_ids.retain(|id| *id != member_id);
            if team.assigned_member_ids.len() != before {
                log_debug(&format!("Removed member {} from team {}", member_id, team_id));
            }
        }
    }

    // ----- Sort and page controls -----

    /// Change the sort key. The current page is kept.
    pub fn set_sort_by(&mut self, key: SortKey) {
        log_debug(&format!("Sorting by {}", key));
        self.sort_by = key;
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn set_assigned_ordering(&mut self, ordering: AssignedOrdering) {
        self.assigned_ordering = ordering;
    }

    pub fn assigned_ordering(&self) -> AssignedOrdering {
        self.assigned_ordering
    }

    /// Not clamped. Callers keep the page inside `1..=total_pages()`.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    pub fn total_pages(&self) -> usize {
        self.teams.len().div_ceil(PAGE_SIZE)
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    // ----- Reads -----

    pub fn all_teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn all_members(&self) -> &[Member] {
        &self.members
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    /// Members on `team` in assignment order. Dangling ids are skipped.
    pub fn assigned_members<'a>(&'a self, team: &'a Team) -> impl Iterator<Item = &'a Member> + 'a {
        team.assigned_member_ids
            .iter()
            .filter_map(move |id| self.member(*id))
    }

    /// Every team, ordered by the active sort key.
    pub fn sorted_teams(&self) -> Vec<&Team> {
        let mut sorted: Vec<&Team> = self.teams.iter().collect();
        sorted.sort_by(|a, b| compare_teams(a, b, self.sort_by, self.assigned_ordering));
        sorted
    }

    /// The slice of sorted teams on the current page. Page 0 is empty.
    pub fn paginated_teams(&self) -> Vec<&Team> {
        let Some(start) = self.current_page.checked_sub(1).map(|p| p * PAGE_SIZE) else {
            return Vec::new();
        };

        self.sorted_teams()
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    }
}
