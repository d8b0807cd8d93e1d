use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use hostwatch::app::{App, run};
use hostwatch::config::Config;
use hostwatch::event::EventHandler;
use hostwatch::logging;
use hostwatch::system::MetricsSource;
use hostwatch::system::collector::Collector;
use hostwatch::ui;
use hostwatch::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "hostwatch",
    about = "Live terminal dashboard for host CPU, memory, disk and top processes"
)]
struct Cli {
    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Path whose filesystem is shown on the Disk line
    #[arg(long)]
    disk_path: Option<PathBuf>,

    /// Use bold/underline only, no colors
    #[arg(long, default_value_t = false)]
    mono: bool,

    /// Print one sample as plain text and exit without taking over the terminal.
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Write diagnostic logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }
    let config = config_for_cli(&cli)?;

    // Fail before touching the terminal so the error lands on the normal screen.
    let mut collector =
        Collector::new(config.disk_path.clone()).wrap_err("host metrics are unavailable")?;

    // CPU usage is a delta between two refreshes.
    tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;

    if cli.once {
        let snapshot = collector.sample();
        println!("{}", ui::dashboard::plain_text(&snapshot));
        return Ok(());
    }

    let mut terminal = ratatui::try_init().wrap_err("failed to initialize terminal")?;

    let mut app = App::new(collector, Theme::from_monochrome_flag(config.monochrome));
    let mut events = EventHandler::new(config.tick_rate());

    let result = run(&mut app, &mut events, |app| {
        terminal.draw(|frame| ui::draw(frame, app))?;
        Ok(())
    })
    .await;

    ratatui::restore();

    result
}

fn config_for_cli(cli: &Cli) -> Result<Config> {
    let mut config = Config::default();

    if let Some(rate) = cli.refresh_rate {
        if rate == 0 {
            return Err(eyre!("--refresh-rate must be greater than 0"));
        }
        config.refresh_rate_ms = rate;
    }
    if let Some(ref path) = cli.disk_path {
        config.disk_path = path.clone();
    }
    config.monochrome = cli.mono;

    Ok(config)
}
