#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => {
      ui::init_tracing("warn")?;
      match list_command {
        ListCommands::Operations { input } => ui::commands::list_operations(&input, &colors).await?,
      }
    }
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command);
      ui::init_tracing(config.log_level())?;
      ui::commands::generate_documents(config, &colors).await?;
    }
  }

  Ok(())
}
