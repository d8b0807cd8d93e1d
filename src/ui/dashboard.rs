use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::format::{NAME_WIDTH, bytes_to_gb, bytes_to_mb, truncate_name};
use crate::system::snapshot::{MetricsSnapshot, ProcessInfo};
use crate::ui::theme::Theme;

pub const TABLE_TITLE: &str = "Top 5 Processes by Memory Usage:";

const PID_WIDTH: usize = 6;
const MEM_WIDTH: usize = 12;
const GAP: &str = "  ";

/// Body region: stats block, a blank line, then the process table.
pub fn render(frame: &mut Frame, area: Rect, snapshot: Option<&MetricsSnapshot>, theme: &Theme) {
    let lines = match snapshot {
        Some(snapshot) => body_lines(snapshot, theme),
        None => vec![Line::from(Span::styled("Sampling...", theme.heading))],
    };
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn body_lines(snapshot: &MetricsSnapshot, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = stats_lines(snapshot, theme);
    lines.push(Line::default());
    lines.extend(table_lines(&snapshot.top_processes, theme));
    lines
}

/// The body as unstyled text, one `\n` between lines.
pub fn plain_text(snapshot: &MetricsSnapshot) -> String {
    body_lines(snapshot, &Theme::monochrome())
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn stats_lines(snapshot: &MetricsSnapshot, theme: &Theme) -> Vec<Line<'static>> {
    let cpu = Line::from(vec![
        Span::styled("CPU Usage:", theme.cpu_label),
        Span::raw(" "),
        Span::styled(format!("{:.1}%", snapshot.cpu_percent), theme.cpu_value),
    ]);

    let memory = usage_line(
        "Memory:",
        snapshot.memory_percent(),
        format!("{}MB", bytes_to_mb(snapshot.memory_used)),
        format!("{}MB", bytes_to_mb(snapshot.memory_total)),
        theme.memory_label,
        theme.memory_value,
        theme,
    );

    let disk = usage_line(
        "Disk:",
        snapshot.disk_percent(),
        format!("{}GB", bytes_to_gb(snapshot.disk_used)),
        format!("{}GB", bytes_to_gb(snapshot.disk_total)),
        theme.disk_label,
        theme.disk_value,
        theme,
    );

    vec![cpu, memory, disk]
}

fn usage_line(
    label: &'static str,
    percent: f64,
    used: String,
    total: String,
    label_style: Style,
    percent_style: Style,
    theme: &Theme,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" "),
        Span::styled(format!("{percent:.1}%"), percent_style),
        Span::raw(" used ("),
        Span::styled(used, theme.used_value),
        Span::raw("/"),
        Span::styled(total, theme.total_value),
        Span::raw(")"),
    ])
}

fn table_lines(processes: &[ProcessInfo], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(TABLE_TITLE, theme.heading)),
        Line::from(vec![
            Span::styled(format!("{:>PID_WIDTH$}", "PID"), theme.pid_header),
            Span::raw(GAP),
            Span::styled(format!("{:<NAME_WIDTH$}", "Name"), theme.name_header),
            Span::raw(GAP),
            Span::styled(format!("{:>MEM_WIDTH$}", "Memory (MB)"), theme.mem_header),
        ]),
        Line::from(Span::styled(
            format!(
                "{}{GAP}{}{GAP}{}",
                "-".repeat(PID_WIDTH),
                "-".repeat(NAME_WIDTH),
                "-".repeat(MEM_WIDTH)
            ),
            theme.divider,
        )),
    ];

    lines.extend(processes.iter().map(|process| {
        Line::from(vec![
            Span::styled(format!("{:>PID_WIDTH$}", process.pid), theme.pid_cell),
            Span::raw(GAP),
            Span::styled(
                format!("{:<NAME_WIDTH$}", truncate_name(&process.name)),
                theme.name_cell,
            ),
            Span::raw(GAP),
            Span::styled(
                format!("{:>MEM_WIDTH$}", bytes_to_mb(process.memory_bytes)),
                theme.mem_cell,
            ),
        ])
    }));

    lines
}
