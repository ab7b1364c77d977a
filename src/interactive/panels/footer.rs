use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::{DashboardApp, Focus};
use crate::store::LoadState;

/// Pagination controls, key hints and the load error, if any.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let store = &app.store;

    let enabled = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(
            " \u{25c0} Previous",
            if store.has_previous_page() { enabled } else { disabled },
        ),
        Span::styled(
            format!("  Page {} / {}  ", store.current_page(), store.total_pages()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            "Next \u{25b6}",
            if store.has_next_page() { enabled } else { disabled },
        ),
    ];

    if let LoadState::Failed(message) = store.load_state() {
        spans.push(Span::styled(format!("   {}", message), Style::default().fg(Color::Red)));
    } else {
        let hints = match app.focus {
            Focus::TeamPage => "   [/]: Page  t: Sort by name  m: Sort by members  Enter: Manage  ?: Help  q: Quit",
            Focus::MemberPanel => "   Space: Assign/Unassign  Tab: Teams  Esc: Close  ?: Help",
        };
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let footer = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(footer, area);
}
