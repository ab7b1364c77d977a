use crate::interactive::app::{DashboardApp, Focus, Popup};
use crate::interactive::keys::Action;
use crate::models::{Member, SortKey, Team};
use crate::store::RosterStore;

fn members() -> Vec<Member> {
    vec![
        Member { id: 1, name: "Leanne Graham".to_string(), email: "leanne@april.biz".to_string() },
        Member { id: 2, name: "Ervin Howell".to_string(), email: "ervin@melissa.tv".to_string() },
    ]
}

fn app_with_teams(count: i64) -> DashboardApp {
    let teams = (1..=count)
        .map(|id| Team::new(id, format!("Team {:02}", id), "body"))
        .collect();
    DashboardApp::new(RosterStore::with_data(teams, members()))
}

#[test]
fn test_page_navigation_is_clamped() {
    let mut app = app_with_teams(12);

    app.handle_action(Action::PreviousPage);
    assert_eq!(app.store.current_page(), 1);

    app.handle_action(Action::NextPage);
    app.handle_action(Action::NextPage);
    app.handle_action(Action::NextPage);
    assert_eq!(app.store.current_page(), 3);
    assert_eq!(app.visible_teams().len(), 2);

    app.handle_action(Action::PreviousPage);
    assert_eq!(app.store.current_page(), 2);
}

#[test]
fn test_navigation_with_no_teams_stays_on_first_page() {
    let mut app = DashboardApp::new(RosterStore::new());
    app.handle_action(Action::NextPage);
    app.handle_action(Action::PreviousPage);
    assert_eq!(app.store.current_page(), 1);
}

#[test]
fn test_sort_actions() {
    let mut app = app_with_teams(3);
    app.handle_action(Action::SortByMembers);
    assert_eq!(app.store.sort_by(), SortKey::AssignedMemberIds);
    app.handle_action(Action::SortByTitle);
    assert_eq!(app.store.sort_by(), SortKey::Title);
}

#[test]
fn test_select_and_toggle_member() {
    let mut app = app_with_teams(3);
    app.handle_action(Action::MoveDown);
    app.handle_action(Action::SelectTeam);

    assert_eq!(app.selected_team_id, Some(2));
    assert_eq!(app.focus, Focus::MemberPanel);

    app.handle_action(Action::MoveDown);
    app.handle_action(Action::ToggleMember);
    assert_eq!(app.store.team(2).unwrap().assigned_member_ids, vec![2]);
    assert!(app.is_assigned_on_page(2));

    app.handle_action(Action::ToggleMember);
    assert!(app.store.team(2).unwrap().assigned_member_ids.is_empty());
    assert!(app.store.team(1).unwrap().assigned_member_ids.is_empty());
}

#[test]
fn test_panel_reads_live_page() {
    let mut app = app_with_teams(7);
    app.handle_action(Action::SelectTeam);
    app.handle_action(Action::ToggleMember);
    assert!(app.is_assigned_on_page(1));

    // Team 1 leaves the visible page; the panel no longer sees its roster
    app.handle_action(Action::NextPage);
    assert!(!app.is_assigned_on_page(1));

    // so toggling assigns again, which is a no-op on the relation
    app.handle_action(Action::ToggleMember);
    assert_eq!(app.store.team(1).unwrap().assigned_member_ids, vec![1]);
}

#[test]
fn test_close_panel_and_switch_focus() {
    let mut app = app_with_teams(2);

    app.handle_action(Action::SwitchPanel);
    assert_eq!(app.focus, Focus::TeamPage);

    app.handle_action(Action::SelectTeam);
    app.handle_action(Action::SwitchPanel);
    assert_eq!(app.focus, Focus::TeamPage);
    app.handle_action(Action::SwitchPanel);
    assert_eq!(app.focus, Focus::MemberPanel);

    app.handle_action(Action::ClosePanel);
    assert_eq!(app.selected_team_id, None);
    assert_eq!(app.focus, Focus::TeamPage);
}

#[test]
fn test_help_and_quit() {
    let mut app = app_with_teams(1);
    app.handle_action(Action::Help);
    assert_eq!(app.popup, Some(Popup::Help));
    app.handle_action(Action::Cancel);
    assert_eq!(app.popup, None);

    app.handle_action(Action::Quit);
    assert!(app.should_quit);
}
