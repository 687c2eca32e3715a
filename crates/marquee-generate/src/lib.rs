//! Synthetic catalog data for marquee.
//!
//! This crate fabricates `Title` and `Credit` batches from per-field rules and
//! exports them as CSV with a fixed, locale-independent layout.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod ids;
pub mod model;
pub mod output;

pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use generators::{GeneratorContext, Record, generate_batch};
pub use ids::IdSequence;
pub use model::{Credit, GenerateOptions, GenerationReport, TableReport, Title};
pub use output::csv::{ExportSummary, write_records_csv};

/// File name of the exported title batch.
pub const TITLES_FILE: &str = "Titles.csv";
/// File name of the exported credit batch.
pub const CREDITS_FILE: &str = "Credits.csv";
/// File name of the optional JSON run report.
pub const REPORT_FILE: &str = "generation_report.json";
