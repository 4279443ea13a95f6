use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Tabs};

use crate::format::format_cpu_percent;
use crate::present::Category;
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&SystemSnapshot>,
    last_refreshed: Option<DateTime<Local>>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    render_branding(frame, chunks[0], snapshot, last_refreshed, theme);

    let (cpu, memory) = snapshot
        .map(|s| (s.cpu_usage_percent, s.memory_percent))
        .unwrap_or((0.0, 0.0));
    render_gauge(
        frame,
        chunks[1],
        " CPU ",
        cpu,
        snapshot.map(|s| format_cpu_percent(s.cpu_usage_percent)),
        theme,
    );
    render_gauge(
        frame,
        chunks[2],
        " RAM ",
        memory,
        snapshot.map(|s| format!("{:.1}%", s.memory_percent)),
        theme,
    );
}

fn render_branding(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&SystemSnapshot>,
    last_refreshed: Option<DateTime<Local>>,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        " pcinfo ",
        Style::default()
            .fg(theme.header_accent_fg)
            .bg(theme.header_accent_bg)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(snapshot) = snapshot {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            snapshot.hostname.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let refreshed = match last_refreshed {
        Some(at) => format!("  {}", at.format("%H:%M:%S")),
        None => "  no data".to_string(),
    };
    spans.push(Span::styled(
        refreshed,
        Style::default().fg(theme.text_secondary),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_gauge(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    percent: f32,
    label: Option<String>,
    theme: &Theme,
) {
    let ratio = f64::from(percent / 100.0).clamp(0.0, 1.0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(theme.usage_color(percent))
                .bg(theme.gauge_unfilled),
        )
        .ratio(ratio)
        .label(label.unwrap_or_else(|| "n/a".to_string()));

    frame.render_widget(gauge, area);
}

/// The tab strip, numbered so the `1`-`5` shortcuts are discoverable.
pub fn render_tabs(frame: &mut Frame, area: Rect, active: Category, theme: &Theme) {
    let titles = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| Line::from(format!("{} {}", i + 1, c.label())));

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(theme.overlay_border)));

    frame.render_widget(tabs, area);
}
