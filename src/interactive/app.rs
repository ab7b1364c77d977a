use crate::logging::log_debug;
use crate::models::{Member, MemberId, SortKey, Team, TeamId};
use crate::store::RosterStore;

use super::keys::Action;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    TeamPage,
    MemberPanel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Popup {
    Help,
}

/// Dashboard state: the session's store plus the bits of UI state around it.
pub struct DashboardApp {
    pub store: RosterStore,
    pub focus: Focus,
    pub popup: Option<Popup>,
    /// Highlighted card on the visible page
    pub card_index: usize,
    /// Highlighted row in the member panel
    pub member_index: usize,
    /// Team whose members are being managed
    pub selected_team_id: Option<TeamId>,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(store: RosterStore) -> Self {
        Self {
            store,
            focus: Focus::TeamPage,
            popup: None,
            card_index: 0,
            member_index: 0,
            selected_team_id: None,
            should_quit: false,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::PreviousPage => self.previous_page(),
            Action::NextPage => self.next_page(),
            Action::SortByTitle => self.sort_by(SortKey::Title),
            Action::SortByMembers => self.sort_by(SortKey::AssignedMemberIds),
            Action::SelectTeam => self.select_highlighted_team(),
            Action::ToggleMember => self.toggle_highlighted_member(),
            Action::SwitchPanel => self.switch_panel(),
            Action::ClosePanel => self.close_panel(),
            Action::Help => self.popup = Some(Popup::Help),
            Action::Cancel => self.popup = None,
            Action::None => {}
        }
    }

    // ----- Reads used by the panels -----

    pub fn visible_teams(&self) -> Vec<&Team> {
        self.store.paginated_teams()
    }

    pub fn highlighted_team(&self) -> Option<&Team> {
        self.visible_teams().get(self.card_index).copied()
    }

    /// Whether `member_id` is on the selected team, read from the live page.
    ///
    /// If the selected team is no longer on the visible page nobody counts as
    /// assigned, so toggling from the panel assigns.
    pub fn is_assigned_on_page(&self, member_id: MemberId) -> bool {
        let Some(team_id) = self.selected_team_id else { return false };
        self.visible_teams()
            .iter()
            .find(|t| t.id == team_id)
            .is_some_and(|t| t.has_member(member_id))
    }

    pub fn highlighted_member(&self) -> Option<&Member> {
        self.store.all_members().get(self.member_index)
    }

    // ----- Commands -----

    fn move_down(&mut self) {
        match self.focus {
            Focus::TeamPage => {
                let count = self.visible_teams().len();
                if count > 0 {
                    self.card_index = (self.card_index + 1) % count;
                }
            }
            Focus::MemberPanel => {
                let count = self.store.all_members().len();
                if count > 0 {
                    self.member_index = (self.member_index + 1) % count;
                }
            }
        }
    }

    fn move_up(&mut self) {
        match self.focus {
            Focus::TeamPage => {
                let count = self.visible_teams().len();
                if count > 0 {
                    self.card_index = if self.card_index == 0 { count - 1 } else { self.card_index - 1 };
                }
            }
            Focus::MemberPanel => {
                let count = self.store.all_members().len();
                if count > 0 {
                    self.member_index = if self.member_index == 0 { count - 1 } else { self.member_index - 1 };
                }
            }
        }
    }

    /// Disabled on the first page.
    pub fn previous_page(&mut self) {
        if self.store.has_previous_page() {
            let page = self.store.current_page() - 1;
            self.store.set_current_page(page);
            self.card_index = 0;
        }
    }

    /// Disabled on the last page.
    pub fn next_page(&mut self) {
        if self.store.has_next_page() {
            let page = self.store.current_page() + 1;
            self.store.set_current_page(page);
            self.card_index = 0;
        }
    }

    fn sort_by(&mut self, key: SortKey) {
        self.store.set_sort_by(key);
        self.clamp_card_index();
    }

    fn select_highlighted_team(&mut self) {
        if self.focus == Focus::MemberPanel {
            self.toggle_highlighted_member();
            return;
        }
        if let Some(team_id) = self.highlighted_team().map(|t| t.id) {
            log_debug(&format!("Managing members of team {}", team_id));
            self.selected_team_id = Some(team_id);
            self.member_index = 0;
            self.focus = Focus::MemberPanel;
        }
    }

    fn toggle_highlighted_member(&mut self) {
        if self.focus != Focus::MemberPanel {
            return;
        }
        let Some(team_id) = self.selected_team_id else { return };
        let Some(member_id) = self.highlighted_member().map(|m| m.id) else { return };

        if self.is_assigned_on_page(member_id) {
            self.store.remove_member_from_team(team_id, member_id);
        } else {
            self.store.assign_member_to_team(team_id, member_id);
        }
    }

    fn switch_panel(&mut self) {
        self.focus = match (self.focus, self.selected_team_id) {
            (Focus::TeamPage, Some(_)) => Focus::MemberPanel,
            _ => Focus::TeamPage,
        };
    }

    fn close_panel(&mut self) {
        self.selected_team_id = None;
        self.focus = Focus::TeamPage;
    }

    fn clamp_card_index(&mut self) {
        let count = self.visible_teams().len();
        if self.card_index >= count {
            self.card_index = count.saturating_sub(1);
        }
    }
}
