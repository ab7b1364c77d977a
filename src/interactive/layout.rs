use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

/// Team page and member panel within the main area
pub struct PanelLayout {
    pub teams: Rect,
    pub members: Rect,
}

pub fn app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Split the main area when the member panel is open.
/// Wide terminals (>=100 cols) put the panel on the right, narrow ones below.
pub fn panel_layout(area: Rect, panel_open: bool) -> PanelLayout {
    if !panel_open {
        return PanelLayout {
            teams: area,
            members: Rect::default(),
        };
    }

    let direction = if area.width < 100 {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };

    let chunks = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(area);

    PanelLayout {
        teams: chunks[0],
        members: chunks[1],
    }
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
