use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::DashboardApp;
use crate::interactive::layout::centered_popup;

const SHORTCUTS: &[(&str, &str, &str, &str)] = &[
    ("j/k", "Move up/down", "Enter", "Manage team"),
    ("[ / \u{2190}", "Previous page", "Space", "Assign/unassign"),
    ("] / \u{2192}", "Next page", "Tab", "Switch panel"),
    ("t", "Sort by name", "Esc", "Close panel"),
    ("m", "Sort by members", "q", "Quit"),
];

/// Draw the keyboard shortcuts overlay.
pub fn draw(frame: &mut Frame, area: Rect, _app: &DashboardApp) {
    let width: u16 = 56;
    let height: u16 = SHORTCUTS.len() as u16 + 6;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<26}", "Navigation"), header_style),
            Span::styled("Members", header_style),
        ]),
        Line::from(Span::styled(
            "\u{2500}".repeat(inner.width.saturating_sub(2) as usize),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    lines.extend(SHORTCUTS.iter().map(|(nav_key, nav_desc, act_key, act_desc)| {
        Line::from(vec![
            Span::styled(format!("{:<9}", nav_key), key_style),
            Span::styled(format!("{:<17}", nav_desc), desc_style),
            Span::styled(format!("{:<7}", act_key), key_style),
            Span::styled(*act_desc, desc_style),
        ])
    }));

    let content = Paragraph::new(lines);
    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    frame.render_widget(content, content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, footer_area);
}
