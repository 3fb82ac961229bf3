//! JavaScript source generation for the jsgen node model.
//!
//! This crate provides:
//! - `Generator`: the unparser, writing minimally-parenthesized source and
//!   reporting the range of every write
//! - `GeneratorOptions`: indentation and line-end settings, loadable from JSON
//! - `SourceWriter`: the append-only buffer with line/column tracking

pub mod generator;
pub use generator::Generator;

pub mod options;
pub use options::GeneratorOptions;

pub mod source_writer;
pub use source_writer::SourceWriter;
