use super::app::DashboardApp;
use super::event::{Event, EventHandler};
use super::keys::map_key;
use crate::client::{RosterClient, RosterSource};
use crate::config::Config;
use crate::constants::TICK_RATE_MS;
use crate::error::{ErrorContext, RosterError, RosterResult};
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crate::roster_error;
use crate::store::RosterStore;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::{mpsc, Arc};

type DashboardTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run_dashboard(config: &Config) -> RosterResult<()> {
    log_info("Starting dashboard");

    let client = Arc::new(RosterClient::from_config(config)?);
    log_debug(&format!("Teams from {}, members from {}", client.teams_url(), client.members_url()));

    let mut store = RosterStore::new();
    store.set_assigned_ordering(config.assigned_ordering);
    let mut app = DashboardApp::new(store);

    install_panic_hook();

    enable_raw_mode().map_err(|e| roster_error!(TerminalError, "Could not enable raw mode: {}", e))?;
    let mut terminal = rollback_on_error(setup_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        disable_raw_mode()
    })?;
    log_debug("Terminal initialized");

    let events = EventHandler::new(TICK_RATE_MS);
    start_load(&mut app.store, client, events.sender());

    let result = run_loop(&mut terminal, &mut app, &events);

    log_info("Exiting dashboard");
    restore_terminal(&mut terminal)?;

    result
}

fn setup_terminal() -> io::Result<DashboardTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `setup`, undoing raw mode with `rollback` if it fails.
pub(crate) fn rollback_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce() -> io::Result<()>,
) -> RosterResult<T> {
    setup().map_err(|e| {
        log_error(&format!("Terminal setup failed: {}", e));
        if let Err(restore_err) = rollback() {
            log_error(&format!("Could not restore terminal: {}", restore_err));
        }
        roster_error!(TerminalError, "{}", e)
    })
}

/// Kick off the session's only load. Each fetch reports back on its own so
/// whichever finishes first is shown first.
pub fn start_load<S>(store: &mut RosterStore, source: Arc<S>, sender: mpsc::Sender<Event>)
where
    S: RosterSource + 'static,
{
    if !store.begin_load() {
        return;
    }

    let teams_source = Arc::clone(&source);
    let teams_sender = sender.clone();
    tokio::spawn(async move {
        let result = teams_source.fetch_teams().await;
        let _ = teams_sender.send(Event::TeamsLoaded(result));
    });

    tokio::spawn(async move {
        let result = source.fetch_members().await;
        let _ = sender.send(Event::MembersLoaded(result));
    });
}

/// Apply one event to the app. Returns true when the screen needs a redraw.
pub fn handle_event(app: &mut DashboardApp, event: Event) -> bool {
    match event {
        Event::Key(key_event) => {
            let action = map_key(key_event, &app.focus, &app.popup);
            log_debug(&format!("Key {:?} -> {:?} (focus {:?})", key_event.code, action, app.focus));
            app.handle_action(action);
            true
        }
        Event::TeamsLoaded(result) => {
            // Failure is logged and kept in the load state by the store
            let _ = app.store.finish_teams(result);
            true
        }
        Event::MembersLoaded(result) => {
            let _ = app.store.finish_members(result);
            true
        }
        Event::Tick => false,
    }
}

fn run_loop(terminal: &mut DashboardTerminal, app: &mut DashboardApp, events: &EventHandler) -> RosterResult<()> {
    let mut dirty = true;

    loop {
        if dirty {
            if let Err(e) = terminal.draw(|f| super::ui::draw(f, app)) {
                log_error(&format!("Error drawing UI: {}", e));
                return Err(RosterError::IoError(e));
            }
        }

        let event = events.recv().context("Event channel closed")?;
        dirty = handle_event(app, event);

        if app.should_quit {
            return Ok(());
        }
    }
}

fn restore_terminal(terminal: &mut DashboardTerminal) -> RosterResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
