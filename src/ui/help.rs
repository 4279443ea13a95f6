use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table};

use crate::ui::theme::Theme;

const KEY_COLUMN: u16 = 10;

/// Centered overlay listing every command with its key.
pub fn render(frame: &mut Frame, area: Rect, entries: &[(String, &str)], theme: &Theme) {
    let width = 44u16.min(area.width.saturating_sub(4));
    let height = (entries.len() as u16 + 2).min(area.height.saturating_sub(2)); // +2 for borders

    let overlay = centered_rect(width, height, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Keybinds ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            " Esc to close ",
            Style::default().fg(theme.text_secondary),
        )))
        .style(Style::default().bg(theme.surface_bg));

    let key_style = Style::default()
        .fg(theme.pill_key_fg)
        .bg(theme.pill_key_bg)
        .add_modifier(Modifier::BOLD);
    let rows = entries.iter().map(|(key, desc)| {
        Row::new([
            Cell::from(Line::from(Span::styled(format!(" {key} "), key_style)).right_aligned()),
            Cell::from(Span::styled(*desc, Style::default().fg(theme.pill_desc_fg))),
        ])
    });

    let table = Table::new(rows, [Constraint::Length(KEY_COLUMN), Constraint::Fill(1)])
        .column_spacing(2)
        .block(block);

    frame.render_widget(table, overlay);
}

/// A `width` x `height` rect centered in `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [horiz] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    horiz
}
