use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{InputMode, ResolvedKeybinds, key_label};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input_mode: InputMode,
    status_message: Option<&(String, Instant)>,
    keybinds: &ResolvedKeybinds,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    let line = match input_mode {
        InputMode::Dialog => Line::from(pill_spans("Enter/Esc", "Close", theme)),
        InputMode::Help => {
            let keys = format!("Esc/{}", key_label(keybinds.help));
            Line::from(pill_spans(&keys, "Close help", theme))
        }
        InputMode::Normal => {
            let mut spans = Vec::new();
            spans.extend(pill_spans(&key_label(keybinds.quit), "Quit", theme));
            spans.extend(pill_spans(&key_label(keybinds.refresh), "Refresh", theme));
            spans.extend(pill_spans(&key_label(keybinds.save), "Save", theme));
            spans.extend(pill_spans("Tab", "Next", theme));
            spans.extend(pill_spans(&key_label(keybinds.cycle_theme), "Theme", theme));
            spans.extend(pill_spans(&key_label(keybinds.help), "Help", theme));
            if let Some((msg, _)) = status_message {
                spans.push(Span::styled(
                    format!("  {msg}"),
                    Style::default()
                        .fg(theme.status_ok)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).style(bg_style), area);
}

fn pill_spans(key: &str, desc: &str, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
