pub(crate) mod attributes;
pub mod converter;
pub(crate) mod emit;
pub(crate) mod parameters;
pub(crate) mod paths;
pub(crate) mod split;
pub(crate) mod tags;

#[cfg(test)]
mod tests;

pub use converter::{Converter, ConverterConfig, DEFAULT_DOC_NAME, GenerationStats, WorkingDocument};
