use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{Dialog, DialogKind};
use crate::ui::help::centered_rect;
use crate::ui::theme::Theme;

const MAX_WIDTH: u16 = 60;

/// Modal message box drawn over everything else.
pub fn render(frame: &mut Frame, area: Rect, dialog: &Dialog, theme: &Theme) {
    let accent = match dialog.kind {
        DialogKind::Info => theme.status_ok,
        DialogKind::Error => theme.status_err,
    };

    let text_width = dialog.message.width().max(dialog.title.len()) as u16 + 4;
    let width = text_width
        .clamp(24, MAX_WIDTH)
        .min(area.width.saturating_sub(2));
    let inner_width = width.saturating_sub(2).max(1);
    let wrapped_lines = (dialog.message.width() as u16).div_ceil(inner_width).max(1);
    // message + blank + hint + borders
    let height = (wrapped_lines + 4).min(area.height.saturating_sub(2));

    let overlay = centered_rect(width, height, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(Span::styled(
            dialog.message.as_str(),
            Style::default().fg(theme.text_primary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Enter/Esc to close",
            Style::default().fg(theme.text_secondary),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(theme.surface_bg)),
        overlay,
    );
}
