pub mod dashboard;
pub mod header;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

/// Full repaint: title bar, metrics body, key hint footer.
pub fn draw<S>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], &app.theme);
    dashboard::render(frame, chunks[1], app.snapshot.as_ref(), &app.theme);
    statusbar::render(frame, chunks[2], &app.key_hints(), &app.theme);
}
