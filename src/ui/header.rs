use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

pub const TITLE: &str = "hostwatch";
const SUBTITLE: &str = "host metrics";

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(TITLE, theme.title_bar),
        Span::styled(format!("  {SUBTITLE}"), theme.title_bar),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(theme.title_bar),
        area,
    );
}
