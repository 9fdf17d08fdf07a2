use std::{
  fs::File,
  io::BufWriter,
  path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use oas3_specgen::{Converter, ConverterConfig, GenerationStats, spec::SpecSetLoader};

use crate::ui::{Colors, GenerateCommand};

/// Folder created under the output directory to hold the documents.
const OUTPUT_FOLDER: &str = "openapi3";

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub split: bool,
  pub public: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      split,
      public,
      verbose,
      quiet,
    } = command;

    Self {
      input,
      output,
      split,
      public,
      verbose,
      quiet,
    }
  }

  pub fn log_level(&self) -> &'static str {
    match (self.verbose, self.quiet) {
      (true, _) => "debug",
      (false, true) => "error",
      (false, false) => "warn",
    }
  }

  fn output_dir(&self) -> PathBuf {
    self.output.join(OUTPUT_FOLDER)
  }

  fn converter_config(&self) -> ConverterConfig {
    ConverterConfig::builder()
      .skip_private_models(self.public)
      .split_output(self.split)
      .build()
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading specification set from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, spec_count: usize) {
    let mode = if self.config.split { "split" } else { "single" };
    self.info(
      &format!("Converting {spec_count} specifications ({mode} output)...")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_writing(&self, dir: &Path) {
    self.info(
      &format!("Writing to: {}", dir.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    self.stat("Documents written:", stats.documents_written.to_string());
    self.stat("Schemas converted:", stats.schemas_converted.to_string());
    self.stat("Paths converted:", stats.paths_converted.to_string());
    self.stat("Operations converted:", stats.operations_converted.to_string());
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated OpenAPI documents".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_documents(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let spec_set = SpecSetLoader::new(&config.input)
    .load()
    .await
    .with_context(|| format!("loading specification set from {}", config.input.display()))?;

  let output_dir = config.output_dir();
  tokio::fs::create_dir_all(&output_dir)
    .await
    .with_context(|| format!("creating {}", output_dir.display()))?;

  logger.log_generating(spec_set.len());
  logger.log_writing(&output_dir);

  let stats = Converter::new(&spec_set, config.converter_config())
    .run(|name| File::create(output_dir.join(name)).map(BufWriter::new))?;

  logger.print_statistics(&stats);
  logger.log_success();

  Ok(())
}
