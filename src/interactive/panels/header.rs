use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::interactive::app::DashboardApp;
use crate::models::SortKey;
use crate::store::{AssignedOrdering, LoadState};

pub fn draw_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let width = area.width as usize;
    let store = &app.store;

    let left = vec![Span::styled(
        " Team Dashboard",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    let mut right_parts = Vec::new();

    right_parts.push(Span::styled(
        format!("{} teams  {} members  ", store.all_teams().len(), store.all_members().len()),
        Style::default().fg(Color::DarkGray),
    ));

    let mut sort_label = format!("sort:{}", store.sort_by().label());
    if store.sort_by() == SortKey::AssignedMemberIds
        && store.assigned_ordering() == AssignedOrdering::ByCount
    {
        sort_label.push_str(" (count)");
    }
    right_parts.push(Span::styled(sort_label, Style::default().fg(Color::DarkGray)));

    if matches!(store.load_state(), LoadState::Loading) {
        right_parts.push(Span::styled(" loading", Style::default().fg(Color::Yellow)));
    }

    right_parts.push(Span::raw(" "));

    let right_text_len: usize = right_parts.iter().map(|s| s.content.chars().count()).sum();
    let left_text_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_text_len + right_text_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right_parts);

    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}
