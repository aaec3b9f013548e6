use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tetra_core::WrapPolicy;

/// Tetra: a spinning wireframe tetrahedron in the terminal.
///
/// Press x, y, or z to toggle spinning about that axis; q or Esc quits.
#[derive(Parser, Debug)]
#[command(name = "tetra", version, about)]
pub struct Args {
    /// Config file path (TOML).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `tetra_core=trace`. Logs go to stderr.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override how angles wrap after a full turn.
    #[arg(long, value_enum)]
    pub wrap: Option<WrapArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WrapArg {
    Subtract,
    Modulo,
}

impl From<WrapArg> for WrapPolicy {
    fn from(arg: WrapArg) -> Self {
        match arg {
            WrapArg::Subtract => WrapPolicy::Subtract,
            WrapArg::Modulo => WrapPolicy::Modulo,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
