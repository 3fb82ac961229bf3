//! Common types and utilities for the jsgen JavaScript generator.
//!
//! This crate provides foundational types used across all jsgen crates:
//! - Position/Range types for generated-source locations
//! - The line/column tracker advanced as generated text is appended

// Position/Range types for line/column source locations
pub mod position;
pub use position::{LocationTracker, SourceLocation, SourceRange};
