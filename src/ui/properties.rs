use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::truncate_unicode;
use crate::present::{Category, DisplayModel, Row};
use crate::ui::theme::Theme;

/// Renders the active category: aligned `name  value` rows, or the volume
/// tree for Disks. `offset` is the first visible line.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: Option<&DisplayModel>,
    category: Category,
    offset: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            format!(" {} ", category.label()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(view) = view else {
        let hint = Line::from(Span::styled(
            " No information collected yet",
            Style::default().fg(theme.text_secondary),
        ));
        frame.render_widget(Paragraph::new(hint), inner);
        return;
    };

    let width = usize::from(inner.width);
    let lines = match category {
        Category::Disks => tree_lines(view, width, theme),
        other => row_lines(view.rows(other), width, theme),
    };

    let visible: Vec<Line> = if lines.is_empty() && category == Category::Disks {
        vec![Line::from(Span::styled(
            " No volumes found",
            Style::default().fg(theme.text_secondary),
        ))]
    } else {
        lines
            .into_iter()
            .skip(offset)
            .take(usize::from(inner.height))
            .collect()
    };

    frame.render_widget(Paragraph::new(visible), inner);
}

fn row_lines<'a>(rows: &'a [Row], width: usize, theme: &Theme) -> Vec<Line<'a>> {
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            let name = format!(" {:<name_width$}  ", row.name);
            let room = width.saturating_sub(name.chars().count());
            Line::from(vec![
                Span::styled(name, Style::default().fg(theme.text_secondary)),
                Span::styled(
                    truncate_unicode(&row.value, room),
                    Style::default().fg(value_color(&row.value, theme)),
                ),
            ])
        })
        .collect()
}

fn tree_lines<'a>(view: &'a DisplayModel, width: usize, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(view.line_count(Category::Disks));

    for node in &view.disks {
        lines.push(Line::from(Span::styled(
            format!(" ▾ {}", truncate_unicode(&node.device, width.saturating_sub(3))),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )));

        let last = node.fields.len().saturating_sub(1);
        for (i, line) in row_lines(&node.fields, width.saturating_sub(5), theme)
            .into_iter()
            .enumerate()
        {
            let branch = if i == last { "   └─" } else { "   ├─" };
            let mut spans = vec![Span::styled(
                branch,
                Style::default().fg(theme.overlay_border),
            )];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
    }

    lines
}

/// Percentages get the usage heat color, everything else stays plain.
fn value_color(value: &str, theme: &Theme) -> Color {
    value
        .strip_suffix('%')
        .and_then(|n| n.parse::<f32>().ok())
        .map_or(theme.text_primary, |percent| theme.usage_color(percent))
}
