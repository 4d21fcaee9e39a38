mod app;
mod config;
mod event;
mod game;
mod ui;

use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use app::App;
use event::InputReader;
use ui::viewport::Viewport;

/// Two-player Pong in the terminal
#[derive(Parser)]
#[command(name = "pong", version, about, long_about = None)]
struct Cli {
    /// Skip the title and controls screens
    #[arg(long)]
    skip_intro: bool,

    /// Where to write the log (defaults to pong.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Raw mode, alternate screen and hidden cursor for as long as it lives.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore_terminal();
            return Err(err.into());
        }
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn init_logging(path: Option<PathBuf>) {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("pong.log"));

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    // Logging must never reach the terminal the game draws on
    let Ok(file) = File::create(&path).or_else(|_| File::create(null_device)) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// `RUST_LOG` directives when set, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let viewport = Viewport::detect();
    tracing::info!(
        cols = viewport.cols,
        rows = viewport.rows,
        x = viewport.x,
        y = viewport.y,
        "session started"
    );

    let mut guard = TerminalGuard::enter()?;
    let input = InputReader::spawn();
    let mut app = App::new(viewport);

    app.run(&mut guard.terminal, input.cell(), cli.skip_intro)
}
