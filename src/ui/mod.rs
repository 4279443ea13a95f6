pub mod dialog;
pub mod header;
pub mod help;
pub mod properties;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let content_area = chunks[2];
    // Borders take two rows
    app.on_resize(content_area.height.saturating_sub(2));

    header::render(
        frame,
        chunks[0],
        app.snapshot.as_ref(),
        app.last_refreshed,
        &app.theme,
    );
    header::render_tabs(frame, chunks[1], app.active_tab, &app.theme);
    properties::render(
        frame,
        content_area,
        app.view.as_ref(),
        app.active_tab,
        app.scroll_offset(),
        &app.theme,
    );
    statusbar::render(
        frame,
        chunks[3],
        app.input_mode,
        app.status_message.as_ref(),
        &app.keybinds,
        &app.theme,
    );

    // Overlays are rendered last to appear on top
    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries(), &app.theme);
    }
    if let Some(open) = &app.dialog {
        dialog::render(frame, frame.area(), open, &app.theme);
    }
}

#[cfg(test)]
mod tests;
