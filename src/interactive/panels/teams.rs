use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::utils::{single_line, truncate};
use crate::interactive::app::{DashboardApp, Focus};

pub const LOADING_MESSAGE: &str = "Loading teams...";

// Title, body, members, spacer
const CARD_HEIGHT: usize = 4;

pub fn draw_teams(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let focused = app.focus == Focus::TeamPage;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let store = &app.store;
    let title = format!(" Teams  page {}/{} ", store.current_page(), store.total_pages());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let page = app.visible_teams();
    if page.is_empty() {
        let loading = Paragraph::new(LOADING_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let text_width = area.width.saturating_sub(4) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let visible_cards = (inner_height / CARD_HEIGHT).max(1);
    let scroll_offset = if app.card_index >= visible_cards {
        app.card_index - visible_cards + 1
    } else {
        0
    };

    let items: Vec<ListItem> = page
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .map(|(i, team)| {
            let highlighted = i == app.card_index && focused;
            let managed = app.selected_team_id == Some(team.id);

            let marker = if managed { "►" } else { " " };
            let title_style = if managed {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };

            let names: Vec<&str> = store
                .assigned_members(team)
                .map(|m| m.name.as_str())
                .collect();
            let members_line = if names.is_empty() {
                Span::styled("none", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(
                    truncate(&names.join(", "), text_width.saturating_sub(18)),
                    Style::default().fg(Color::Green),
                )
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
                    Span::styled(truncate(&team.title, text_width.saturating_sub(2)), title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", truncate(&single_line(&team.body), text_width.saturating_sub(2))),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(vec![
                    Span::styled("  Assigned members: ", Style::default().fg(Color::DarkGray)),
                    members_line,
                ]),
                Line::from(""),
            ];

            let item = ListItem::new(lines);
            if highlighted {
                item.style(Style::default().bg(Color::Rgb(30, 35, 50)))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
