//! Tetra Terminal Demo - Spinning Tetrahedron
//!
//! Renders a wireframe tetrahedron and spins it about the toggled axes.
//! Controls:
//!   - x / y / z: Toggle spin about that axis
//!   - Q/ESC: Quit

mod cli;

use std::process::ExitCode;
use tetra_core::{config, ViewerConfig};
use tetra_terminal::{AppError, TerminalApp};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "tetra=warn";

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        default_hook(info);
    }));
}

fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: cli::Args) -> Result<(), AppError> {
    let mut config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(wrap) = args.wrap {
        config.animation.wrap = wrap.into();
    }
    tracing::info!(
        title = %config.window.title,
        spin_rate = config.animation.spin_rate,
        wrap = ?config.animation.wrap,
        "starting"
    );

    let mut app = TerminalApp::new(config);
    app.run()
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());
    install_panic_hook();

    match run(args) {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("fatal: {e}");
            eprintln!("tetra: {e}");
            ExitCode::FAILURE
        }
    }
}
