mod hands;
mod layout;
mod popups;

use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    hands::draw_board(f, app);

    if app.help_open() {
        popups::draw_help(f);
    } else if let Some(verdict) = app.verdict() {
        popups::draw_verdict(f, verdict);
    } else if app.name_entry_active() {
        popups::draw_name_entry(f, app);
    }
}
