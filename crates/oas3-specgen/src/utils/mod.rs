pub mod refs;

pub use refs::{SCHEMA_REF_PREFIX, cross_document_ref, parse_schema_ref_path};
