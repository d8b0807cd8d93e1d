use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

/// Footer with one pill per key binding.
pub fn render(frame: &mut Frame, area: Rect, hints: &[(String, &str)], theme: &Theme) {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| pill_spans(key, desc, theme))
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.footer_bg), area);
}

fn pill_spans<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(format!(" {key} "), theme.pill_key),
        Span::styled(format!(" {desc}"), theme.pill_desc),
    ]
}
