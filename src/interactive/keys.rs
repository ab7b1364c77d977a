use crossterm::event::{KeyCode, KeyEvent};
use crate::interactive::app::{Focus, Popup};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PreviousPage,
    NextPage,

    // Sorting
    SortByTitle,
    SortByMembers,

    // Member management
    SelectTeam,
    ToggleMember,
    SwitchPanel,
    ClosePanel,

    // General
    Help,
    Cancel,
    Quit,

    None,
}

pub fn map_key(key: KeyEvent, focus: &Focus, popup: &Option<Popup>) -> Action {
    if let Some(popup) = popup {
        return map_popup_key(key, popup);
    }
    match focus {
        Focus::TeamPage => map_team_key(key),
        Focus::MemberPanel => map_member_key(key),
    }
}

/// Keys that behave the same whichever panel has focus.
fn map_shared_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('[') | KeyCode::Left => Action::PreviousPage,
        KeyCode::Char(']') | KeyCode::Right => Action::NextPage,
        KeyCode::Char('t') => Action::SortByTitle,
        KeyCode::Char('m') => Action::SortByMembers,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchPanel,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_team_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::SelectTeam,
        KeyCode::Esc => Action::ClosePanel,
        _ => map_shared_key(key),
    }
}

fn map_member_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleMember,
        KeyCode::Esc => Action::ClosePanel,
        _ => map_shared_key(key),
    }
}

fn map_popup_key(key: KeyEvent, popup: &Popup) -> Action {
    match popup {
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
    }
}
