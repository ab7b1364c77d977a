use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::utils::truncate;
use crate::interactive::app::{DashboardApp, Focus};

/// Member assignment panel for the selected team.
pub fn draw_members(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(team_id) = app.selected_team_id else { return };

    let focused = app.focus == Focus::MemberPanel;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Manage members of team #{} ", team_id))
        .border_style(border_style);

    let members = app.store.all_members();
    if members.is_empty() {
        let empty = Paragraph::new("No members")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let name_width = area.width.saturating_sub(20) as usize;
    let scroll_offset = if app.member_index >= inner_height {
        app.member_index - inner_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = members
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(inner_height)
        .map(|(i, member)| {
            let assigned = app.is_assigned_on_page(member.id);
            let (checkbox, action, action_color) = if assigned {
                ("[\u{2713}]", "Unassign", Color::Red)
            } else {
                ("[ ]", "Assign", Color::Green)
            };

            let row_style = if i == app.member_index && focused {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", checkbox), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<width$}", truncate(&member.name, name_width), width = name_width), row_style),
                Span::styled(format!(" {}", action), Style::default().fg(action_color)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
