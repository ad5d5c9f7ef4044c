use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::Dimensions;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Number of columns (invalid values fall back to 7)
    #[arg(long)]
    width: Option<String>,

    /// Number of rows (invalid values fall back to 6)
    #[arg(long)]
    height: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = load_config(&cli.config);
    let dims = board_dimensions(&cli, &config);

    run_tui(dims)
}

/// A config file that cannot be read or parsed never blocks a game start.
fn load_config(path: &Path) -> AppConfig {
    AppConfig::load_or_default(path).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring config file, using defaults");
        AppConfig::default()
    })
}

/// CLI flags override the config file, which overrides the defaults.
fn board_dimensions(cli: &Cli, config: &AppConfig) -> Dimensions {
    config
        .board
        .dimensions()
        .with_overrides(cli.width.as_deref(), cli.height.as_deref())
}

/// Logs go to a file so they never draw over the terminal UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(dims: Dimensions) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(dims);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["connect-four", "--width", "9"]);
        let mut config = AppConfig::default();
        config.board.height = 8;
        assert_eq!(
            board_dimensions(&cli, &config),
            Dimensions::new(9, 8).unwrap()
        );
    }

    #[test]
    fn test_config_file_invalid_axis_uses_per_axis_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[board]\nwidth = 0\nheight = 10\n").unwrap();

        let cli = Cli::parse_from(["connect-four"]);
        let config = load_config(&path);
        assert_eq!(
            board_dimensions(&cli, &config),
            Dimensions::new(7, 10).unwrap()
        );
    }

    #[test]
    fn test_unparsable_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[board]\nwidth = \"wide\"\n").unwrap();

        assert_eq!(load_config(&path), AppConfig::default());
    }

    #[test]
    fn test_malformed_cli_values_use_defaults() {
        let cli = Cli::parse_from(["connect-four", "--width", "wide", "--height=-3"]);
        let mut config = AppConfig::default();
        config.board.width = 12;
        assert_eq!(board_dimensions(&cli, &config), Dimensions::default());
    }
}
