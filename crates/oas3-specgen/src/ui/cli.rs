use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas3-specgen")]
#[command(author, version, about = "REST resource specification to OpenAPI 3 compiler")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a generated OpenAPI document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate OpenAPI 3 documents from a specification set
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Directory holding the `*.spec` files, `_type.mapping` and `_config.yaml`
  #[arg(short, long, value_name = "DIR")]
  pub input: PathBuf,

  /// Directory under which the `openapi3` output folder is created
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub output: PathBuf,

  /// Write one document per resource instead of a single `toplevel` document
  #[arg(short, long, default_value_t = false)]
  pub split: bool,

  /// Leave private models out of the generated documents
  #[arg(short, long, default_value_t = false)]
  pub public: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in a generated OpenAPI document
  Operations {
    /// Path to the OpenAPI JSON document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_generate_flags() {
    let cli = Cli::try_parse_from(["oas3-specgen", "generate", "-i", "specs", "--split", "--public"]).unwrap();

    let Commands::Generate(command) = cli.command else {
      panic!("expected generate command");
    };
    assert_eq!(command.input, PathBuf::from("specs"));
    assert_eq!(command.output, PathBuf::from("."));
    assert!(command.split);
    assert!(command.public);
    assert!(!command.quiet);
  }
}
