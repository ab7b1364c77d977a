use ratatui::{backend::TestBackend, Terminal};

use crate::interactive::app::DashboardApp;
use crate::interactive::handlers::handle_event;
use crate::interactive::event::Event;
use crate::interactive::keys::Action;
use crate::interactive::panels::teams::LOADING_MESSAGE;
use crate::interactive::ui;
use crate::models::{Member, Team};
use crate::store::{AssignedOrdering, RosterStore};

fn render(app: &DashboardApp) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer.get(x, y).symbol());
        }
        screen.push('\n');
    }
    screen
}

fn alice() -> Member {
    Member { id: 7, name: "Alice".to_string(), email: "alice@example.com".to_string() }
}

#[test]
fn test_empty_page_shows_loading() {
    let app = DashboardApp::new(RosterStore::new());
    assert!(render(&app).contains(LOADING_MESSAGE));
}

#[test]
fn test_cards_show_assigned_names() {
    let mut store = RosterStore::with_data(
        vec![Team::new(1, "Platform", "Keeps the lights on"), Team::new(2, "Growth", "Ships experiments")],
        vec![alice()],
    );
    store.assign_member_to_team(1, 7);
    let screen = render(&DashboardApp::new(store));

    assert!(!screen.contains(LOADING_MESSAGE));
    assert!(screen.contains("Platform"));
    assert!(screen.contains("Keeps the lights on"));
    assert!(screen.contains("Alice"));
    assert!(screen.contains("Page 1 / 1"));
}

#[test]
fn test_header_marks_count_ordering() {
    let mut store = RosterStore::with_data(vec![Team::new(1, "Platform", "")], vec![alice()]);
    store.set_assigned_ordering(AssignedOrdering::ByCount);
    let mut app = DashboardApp::new(store);
    assert!(!render(&app).contains("(count)"));

    app.handle_action(Action::SortByMembers);
    assert!(render(&app).contains("(count)"));
}

#[test]
fn test_dangling_member_renders_nothing() {
    let mut store = RosterStore::with_data(vec![Team::new(1, "Platform", "")], vec![alice()]);
    store.assign_member_to_team(1, 404);
    let screen = render(&DashboardApp::new(store));

    assert!(screen.contains("Assigned members: none"));
    assert!(!screen.contains("404"));
}

#[test]
fn test_member_panel_offers_toggle() {
    let store = RosterStore::with_data(vec![Team::new(1, "Platform", "")], vec![alice()]);
    let mut app = DashboardApp::new(store);
    app.handle_action(Action::SelectTeam);

    let screen = render(&app);
    assert!(screen.contains("Manage members of team #1"));
    assert!(screen.contains("[ ] Alice"));

    app.handle_action(Action::ToggleMember);
    assert!(render(&app).contains("[\u{2713}] Alice"));
}

#[test]
fn test_load_events_fill_the_page() {
    let mut store = RosterStore::new();
    assert!(store.begin_load());
    let mut app = DashboardApp::new(store);

    assert!(handle_event(&mut app, Event::TeamsLoaded(Ok(vec![Team::new(1, "Platform", "")]))));
    assert!(app.store.is_loading());
    assert!(handle_event(&mut app, Event::MembersLoaded(Ok(vec![alice()]))));
    assert!(!handle_event(&mut app, Event::Tick));

    assert!(render(&app).contains("Platform"));
}

#[test]
fn test_failed_load_shows_error_in_footer() {
    let mut store = RosterStore::new();
    store.begin_load();
    let mut app = DashboardApp::new(store);

    handle_event(&mut app, Event::TeamsLoaded(Err(crate::error::RosterError::ApiError("status 503".to_string()))));
    handle_event(&mut app, Event::MembersLoaded(Ok(vec![])));

    let screen = render(&app);
    assert!(screen.contains(LOADING_MESSAGE));
    assert!(screen.contains("status 503"));
}
