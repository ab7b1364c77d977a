use ratatui::Frame;

use super::app::DashboardApp;
use super::layout::{app_layout, panel_layout};
use super::panels::{footer, header, members, teams};
use super::popups::draw_popup;

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.size();
    let layout = app_layout(area);

    header::draw_header(frame, layout.header, app);

    let panels = panel_layout(layout.main, app.selected_team_id.is_some());
    teams::draw_teams(frame, panels.teams, app);
    if app.selected_team_id.is_some() {
        members::draw_members(frame, panels.members, app);
    }

    footer::draw_footer(frame, layout.footer, app);
    draw_popup(frame, area, app);
}
