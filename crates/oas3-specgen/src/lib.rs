#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
//! Compiles REST resource specification sets into OpenAPI 3.0.3 documents.
//!
//! ```no_run
//! # async fn run() -> oas3_specgen::Result<()> {
//! use oas3_specgen::{Converter, ConverterConfig, spec::SpecSetLoader};
//!
//! let spec_set = SpecSetLoader::new("specs").load().await?;
//! let config = ConverterConfig::builder().split_output(true).build();
//! let stats = Converter::new(&spec_set, config).run(|name| std::fs::File::create(name))?;
//! println!("wrote {} documents", stats.documents_written);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod openapi;
pub mod spec;
pub mod utils;

pub use error::{Error, Result};
pub use generator::{Converter, ConverterConfig, GenerationStats};
