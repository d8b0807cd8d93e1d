use ratatui::style::{Color, Modifier, Style};

/// Styles for the three semantic groups on screen: headings, labels and
/// values, plus the chrome around them.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title_bar: Style,
    pub heading: Style,
    pub divider: Style,

    pub cpu_label: Style,
    pub cpu_value: Style,
    pub memory_label: Style,
    pub memory_value: Style,
    pub disk_label: Style,
    pub disk_value: Style,
    pub used_value: Style,
    pub total_value: Style,

    pub pid_header: Style,
    pub name_header: Style,
    pub mem_header: Style,
    pub pid_cell: Style,
    pub name_cell: Style,
    pub mem_cell: Style,

    pub footer_bg: Style,
    pub pill_key: Style,
    pub pill_desc: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

impl Theme {
    pub fn from_monochrome_flag(monochrome: bool) -> Self {
        if monochrome {
            Self::monochrome()
        } else {
            Self::colored()
        }
    }

    pub fn colored() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Theme {
            title_bar: bold.fg(Color::Black).bg(Color::Cyan),
            heading: bold.add_modifier(Modifier::UNDERLINED),
            divider: Style::default().fg(Color::DarkGray),

            cpu_label: bold.fg(Color::Yellow),
            cpu_value: Style::default().fg(Color::Yellow),
            memory_label: bold.fg(Color::Magenta),
            memory_value: Style::default().fg(Color::Magenta),
            disk_label: bold.fg(Color::Green),
            disk_value: Style::default().fg(Color::Green),
            used_value: Style::default().fg(Color::Green),
            total_value: Style::default().fg(Color::Blue),

            pid_header: bold.fg(Color::Cyan),
            name_header: bold.fg(Color::White),
            mem_header: bold.fg(Color::Magenta),
            pid_cell: Style::default().fg(Color::Cyan),
            name_cell: Style::default().fg(Color::White),
            mem_cell: Style::default().fg(Color::Magenta),

            footer_bg: Style::default().bg(Color::Black),
            pill_key: bold.fg(Color::Black).bg(Color::Yellow),
            pill_desc: Style::default().fg(Color::Gray),
        }
    }

    /// No colors at all; groups stay apart through modifiers alone.
    pub fn monochrome() -> Self {
        let heading = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let label = Style::default().add_modifier(Modifier::BOLD);
        let value = Style::default();
        Theme {
            title_bar: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            heading,
            divider: value,

            cpu_label: label,
            cpu_value: value,
            memory_label: label,
            memory_value: value,
            disk_label: label,
            disk_value: value,
            used_value: value,
            total_value: value,

            pid_header: label,
            name_header: label,
            mem_header: label,
            pid_cell: value,
            name_cell: value,
            mem_cell: value,

            footer_bg: value,
            pill_key: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            pill_desc: value,
        }
    }
}
