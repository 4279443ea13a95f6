use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::{App, Dialog, InputMode, ResolvedKeybinds};
use crate::config::{Config, KeybindsConfig};
use crate::present::{Category, render};
use crate::system::collector::{Collector, DEFAULT_CPU_SAMPLE};
use crate::system::fixed::{FixedProvider, example_snapshot};
use crate::ui::theme::{ColorSupport, HeatOverrides, Theme};
use crate::ui::{dialog, header, properties, statusbar};

fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            let cell = buf.cell((x, y)).unwrap();
            out.push_str(cell.symbol());
        }
        if y + 1 < area.height {
            out.push('\n');
        }
    }
    out
}

fn render_to_string<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut ratatui::Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    let buf = terminal.backend().buffer();
    buffer_to_string(buf)
}

fn make_theme() -> Theme {
    let heat = HeatOverrides {
        low: "#2d5a27".to_string(),
        mid: "#b5890a".to_string(),
        high: "#a12e2e".to_string(),
    };
    Theme::from_config("dark", &heat, ColorSupport::Truecolor)
}

fn make_app(provider: FixedProvider) -> App {
    let mut config = Config::default();
    config.colors.color_support = "truecolor".to_string();
    let collector = Collector::with_provider(Box::new(provider), DEFAULT_CPU_SAMPLE);
    App::with_collector(&config, collector)
}

fn draw_app(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| crate::ui::draw(frame, app)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn snapshot_properties_cpu() {
    let view = render(&example_snapshot());
    let output = render_to_string(40, 5, |frame| {
        properties::render(
            frame,
            Rect::new(0, 0, 40, 5),
            Some(&view),
            Category::Cpu,
            0,
            &make_theme(),
        );
    });

    assert_snapshot!("ui_properties_cpu", output);
}

#[test]
fn disks_tab_draws_volume_tree() {
    let view = render(&example_snapshot());
    let output = render_to_string(60, 9, |frame| {
        properties::render(
            frame,
            Rect::new(0, 0, 60, 9),
            Some(&view),
            Category::Disks,
            0,
            &make_theme(),
        );
    });

    assert!(output.contains("▾ C:"));
    assert!(output.contains("├─ Mountpoint"));
    assert!(output.contains("ntfs"));
    assert!(output.contains("└─ Percentage   50.0%"));
}

#[test]
fn empty_disk_list_shows_hint() {
    let mut snapshot = example_snapshot();
    snapshot.disks.clear();
    let view = render(&snapshot);
    let output = render_to_string(40, 4, |frame| {
        properties::render(
            frame,
            Rect::new(0, 0, 40, 4),
            Some(&view),
            Category::Disks,
            0,
            &make_theme(),
        );
    });

    assert!(output.contains("No volumes found"));
}

#[test]
fn scrolled_properties_skip_leading_rows() {
    let view = render(&example_snapshot());
    let output = render_to_string(50, 5, |frame| {
        properties::render(
            frame,
            Rect::new(0, 0, 50, 5),
            Some(&view),
            Category::System,
            2,
            &make_theme(),
        );
    });

    assert!(!output.contains("Node Name"));
    assert!(output.contains("Release"));
    assert!(output.contains("Machine"));
}

#[test]
fn header_shows_hostname_and_gauges() {
    let snapshot = example_snapshot();
    let output = render_to_string(90, 3, |frame| {
        header::render(
            frame,
            Rect::new(0, 0, 90, 3),
            Some(&snapshot),
            None,
            &make_theme(),
        );
    });

    assert!(output.contains("pcinfo"));
    assert!(output.contains("host1"));
    assert!(output.contains("CPU"));
    assert!(output.contains("37%"));
    assert!(output.contains("50.0%"));
}

#[test]
fn header_without_data_says_so() {
    let output = render_to_string(90, 3, |frame| {
        header::render(frame, Rect::new(0, 0, 90, 3), None, None, &make_theme());
    });

    assert!(output.contains("no data"));
    assert!(output.contains("n/a"));
}

#[test]
fn tabs_list_every_category_in_order() {
    let output = render_to_string(60, 1, |frame| {
        header::render_tabs(frame, Rect::new(0, 0, 60, 1), Category::Disks, &make_theme());
    });

    let positions: Vec<usize> = ["1 System", "2 CPU", "3 Memory", "4 Disks", "5 Network"]
        .iter()
        .map(|label| output.find(label).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn statusbar_lists_commands() {
    let keybinds = ResolvedKeybinds::from_config(&KeybindsConfig::default());
    let output = render_to_string(90, 1, |frame| {
        statusbar::render(
            frame,
            Rect::new(0, 0, 90, 1),
            InputMode::Normal,
            None,
            &keybinds,
            &make_theme(),
        );
    });

    assert!(output.contains(" r  Refresh"));
    assert!(output.contains(" s  Save"));
    assert!(output.contains(" q  Quit"));
}

#[test]
fn dialog_shows_message_and_hint() {
    let output = render_to_string(60, 10, |frame| {
        dialog::render(
            frame,
            Rect::new(0, 0, 60, 10),
            &Dialog::info("Information saved to system_info.txt".to_string()),
            &make_theme(),
        );
    });

    assert!(output.contains("Success"));
    assert!(output.contains("Information saved to system_info.txt"));
    assert!(output.contains("Enter/Esc to close"));
}

#[test]
fn full_screen_draws_active_tab() {
    let mut app = make_app(FixedProvider::example());
    app.dispatch(Action::SelectTab(Category::Network));

    let output = draw_app(&mut app, 100, 20);

    assert!(output.contains("IP Address"));
    assert!(output.contains("10.0.0.5"));
    assert!(output.contains("aa:bb:cc:dd:ee:ff"));
    assert!(!output.contains("Total Memory"));
}

#[test]
fn full_screen_draws_error_dialog_over_empty_view() {
    let mut provider = FixedProvider::example();
    provider.memory = None;
    let mut app = make_app(provider);

    let output = draw_app(&mut app, 100, 20);

    assert!(output.contains("No information collected yet"));
    assert!(output.contains("Error collecting system information"));
}

#[test]
fn full_screen_draws_help_overlay() {
    let mut app = make_app(FixedProvider::example());
    app.dispatch(Action::ToggleHelp);

    let output = draw_app(&mut app, 100, 24);

    assert!(output.contains("Keybinds"));
    assert!(output.contains("Save to file"));
}

#[test]
fn draw_records_content_height() {
    let mut app = make_app(FixedProvider::example());
    draw_app(&mut app, 100, 20);
    // 20 rows minus header, tabs, statusbar and the content borders
    assert_eq!(app.content_height, 13);
}
