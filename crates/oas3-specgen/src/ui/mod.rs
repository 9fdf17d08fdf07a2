pub mod cli;
pub mod colors;
pub mod commands;

use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Commands, GenerateCommand, ListCommands};
pub use colors::Colors;

fn term_width() -> u16 {
  if let Ok((width, _)) = crossterm::terminal::size() {
    width
  } else {
    80
  }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `default_level`.
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(default_level: &str) -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))
}
