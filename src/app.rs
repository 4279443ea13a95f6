use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::{Action, Direction};
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::present::{self, Category, DisplayModel};
use crate::system::collector::Collector;
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::{ColorSupport, HeatOverrides, Theme, resolve_color_support};

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
    Dialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// A modal message box. While one is open every key except Enter, Esc and
/// Ctrl+C is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: &'static str,
    pub message: String,
}

impl Dialog {
    pub fn info(message: String) -> Self {
        Self {
            kind: DialogKind::Info,
            title: "Success",
            message,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error",
            message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub refresh: KeyCode,
    pub save: KeyCode,
    pub help: KeyCode,
    pub cycle_theme: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            save: parse_key(&kb.save).unwrap_or(KeyCode::Char('s')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
            cycle_theme: parse_key(&kb.cycle_theme).unwrap_or(KeyCode::Char('t')),
        }
    }

    /// Returns (key_label, description) pairs for the help overlay.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.refresh), "Refresh information"),
            (key_label(self.save), "Save to file"),
            ("Tab/→".to_string(), "Next tab"),
            ("S-Tab/←".to_string(), "Previous tab"),
            ("1-5".to_string(), "Jump to tab"),
            ("↑↓".to_string(), "Scroll"),
            (key_label(self.cycle_theme), "Cycle theme"),
            (key_label(self.help), "Toggle help"),
            (key_label(self.quit), "Quit"),
            ("Ctrl+C".to_string(), "Quit (always)"),
        ]
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    }
}

pub struct App {
    pub running: bool,
    pub collector: Collector,
    /// Last successfully collected snapshot, kept for the header gauges.
    pub snapshot: Option<SystemSnapshot>,
    pub view: Option<DisplayModel>,
    pub active_tab: Category,
    scroll: [usize; Category::ALL.len()],
    pub input_mode: InputMode,
    pub dialog: Option<Dialog>,
    pub status_message: Option<(String, Instant)>,
    pub last_refreshed: Option<DateTime<Local>>,
    pub theme: Theme,
    pub color_support: ColorSupport,
    heat_overrides: HeatOverrides,
    pub output_path: PathBuf,
    /// Height of the content area from the last draw, for scroll clamping.
    pub content_height: u16,
    pub keybinds: ResolvedKeybinds,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let sample = Duration::from_millis(config.general.cpu_sample_ms);
        Self::with_collector(config, Collector::new(sample))
    }

    /// Builds the app around an existing collector and performs the initial
    /// refresh.
    pub fn with_collector(config: &Config, collector: Collector) -> Self {
        let color_support = resolve_color_support(&config.colors.color_support);
        let heat_overrides = HeatOverrides::from_config(&config.colors);
        let theme = Theme::from_config(&config.colors.theme, &heat_overrides, color_support);

        let mut app = App {
            running: true,
            collector,
            snapshot: None,
            view: None,
            active_tab: Category::from_str_config(&config.general.default_tab),
            scroll: [0; Category::ALL.len()],
            input_mode: InputMode::Normal,
            dialog: None,
            status_message: None,
            last_refreshed: None,
            theme,
            color_support,
            heat_overrides,
            output_path: PathBuf::from(&config.general.output_file),
            content_height: 0,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        };
        app.refresh();
        app
    }

    /// Collects and re-renders. On failure the previous view stays and a
    /// single error dialog is opened.
    pub fn refresh(&mut self) {
        #[cfg(feature = "trace-log")]
        let _refresh_span = tracing::debug_span!("app.refresh").entered();

        match self.collector.collect() {
            Ok(snapshot) => {
                self.view = Some(present::render(&snapshot));
                self.snapshot = Some(snapshot);
                let now = Local::now();
                self.last_refreshed = Some(now);
                self.clamp_scroll();
                self.set_status(format!("Refreshed at {}", now.format("%H:%M:%S")));
            }
            Err(err) => {
                #[cfg(feature = "trace-log")]
                tracing::debug!(error = %err, "collection failed");
                self.open_dialog(Dialog::error(format!(
                    "Error collecting system information: {err}"
                )));
            }
        }
    }

    /// Collects afresh and writes the report to the output path.
    pub fn save(&mut self) {
        #[cfg(feature = "trace-log")]
        let _save_span = tracing::debug_span!("app.save", path = %self.output_path.display())
            .entered();

        let collected = self.collector.collect();
        match present::write_report(&self.output_path, collected) {
            Ok(()) => self.open_dialog(Dialog::info(format!(
                "Information saved to {}",
                self.output_path.display()
            ))),
            Err(err) => self.open_dialog(Dialog::error(format!("Failed to save file: {err}"))),
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
            InputMode::Dialog => match key.code {
                KeyCode::Enter | KeyCode::Esc => Action::DismissDialog,
                _ => Action::None,
            },
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        // Navigation keys are hardwired (not configurable)
        match code {
            KeyCode::Tab | KeyCode::Right => return Action::NextTab,
            KeyCode::BackTab | KeyCode::Left => return Action::PrevTab,
            KeyCode::Up => return Action::Scroll(Direction::Up),
            KeyCode::Down => return Action::Scroll(Direction::Down),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(category) = Category::from_index(index) {
                    return Action::SelectTab(category);
                }
            }
            _ => {}
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.save {
            return Action::Save;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }
        if code == kb.cycle_theme {
            return Action::CycleTheme;
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Refresh => self.refresh(),
            Action::Save => self.save(),
            Action::NextTab => self.active_tab = self.active_tab.next(),
            Action::PrevTab => self.active_tab = self.active_tab.prev(),
            Action::SelectTab(category) => self.active_tab = category,
            Action::Scroll(direction) => self.scroll_by(direction),
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::DismissDialog => {
                self.dialog = None;
                self.input_mode = InputMode::Normal;
            }
            Action::CycleTheme => {
                self.theme = self.theme.next(&self.heat_overrides, self.color_support);
                self.set_status(format!("Theme: {}", self.theme.name));
            }
            Action::None => {}
        }

        self.expire_status();
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }

    /// First visible line of the active tab.
    pub fn scroll_offset(&self) -> usize {
        self.scroll[self.active_tab.index()]
    }

    fn scroll_by(&mut self, direction: Direction) {
        let max = self.max_scroll(self.active_tab);
        let offset = &mut self.scroll[self.active_tab.index()];
        *offset = match direction {
            Direction::Up => offset.saturating_sub(1),
            Direction::Down => (*offset + 1).min(max),
        };
    }

    fn max_scroll(&self, category: Category) -> usize {
        let lines = self
            .view
            .as_ref()
            .map_or(0, |view| view.line_count(category));
        lines.saturating_sub(usize::from(self.content_height.max(1)))
    }

    fn clamp_scroll(&mut self) {
        for category in Category::ALL {
            let max = self.max_scroll(category);
            let offset = &mut self.scroll[category.index()];
            *offset = (*offset).min(max);
        }
    }

    pub fn on_resize(&mut self, content_height: u16) {
        self.content_height = content_height;
        self.clamp_scroll();
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
        self.input_mode = InputMode::Dialog;
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    fn expire_status(&mut self) {
        if let Some((_, created)) = &self.status_message
            && created.elapsed() >= STATUS_TTL
        {
            self.status_message = None;
        }
    }
}
