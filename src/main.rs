use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::KeyEventKind;

use pcinfo::app::App;
use pcinfo::config::{Config, load_config, load_config_from_path};
use pcinfo::event::{Event, EventHandler};
use pcinfo::present::write_report;
use pcinfo::system::collector::Collector;
use pcinfo::ui;

#[derive(Parser)]
#[command(
    name = "pcinfo",
    about = "Collects local system information and shows it in a tabbed terminal view"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// File the report is saved to
    #[arg(long)]
    output: Option<PathBuf>,

    /// CPU usage sampling window in milliseconds
    #[arg(long)]
    cpu_sample_ms: Option<u64>,

    /// Theme: dark, light, colorblind, mono
    #[arg(long)]
    theme: Option<String>,

    /// Collect once, write the report and exit without starting the UI.
    #[arg(long, default_value_t = false)]
    export: bool,

    /// Span log output file (JSON lines).
    #[cfg(feature = "trace-log")]
    #[arg(long)]
    trace_output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    #[cfg(feature = "trace-log")]
    {
        if let Some(path) = &cli.trace_output {
            pcinfo::trace::init_tracing_json(path)?;
        }
    }

    if cli.export {
        return run_export(&config);
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, &config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    let mut events = EventHandler::new();

    terminal.draw(|frame| ui::draw(frame, &mut app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        let should_draw = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = app.map_key(key);
                app.dispatch(action);
                true
            }
            Event::Key(_) => false,
            Event::Resize => true,
        };
        if should_draw {
            terminal.draw(|frame| ui::draw(frame, &mut app))?;
        }
    }

    Ok(())
}

fn run_export(config: &Config) -> Result<()> {
    let path = PathBuf::from(&config.general.output_file);
    let mut collector = Collector::new(Duration::from_millis(config.general.cpu_sample_ms));
    write_report(&path, collector.collect())?;
    println!("Information saved to {}", path.display());
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ref output) = cli.output {
        config.general.output_file = output.display().to_string();
    }
    if let Some(ms) = cli.cpu_sample_ms {
        config.general.cpu_sample_ms = ms;
    }
    if let Some(ref theme) = cli.theme {
        config.colors.theme = theme.clone();
    }

    config
}
