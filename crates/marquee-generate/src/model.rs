use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A fictitious film or series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Title {
    pub id: i64,
    pub title_name: String,
    pub description: String,
    pub release_year: i32,
    pub age_certification: String,
    /// Minutes.
    pub runtime: i32,
    pub genres: String,
    pub production_country: String,
    /// `None` for films; exported as an empty field.
    pub seasons: Option<i32>,
}

/// A fictitious cast or crew credit.
///
/// `title_id` is drawn on its own and is not checked against any generated
/// [`Title::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credit {
    pub id: i64,
    pub title_id: i64,
    pub real_name: String,
    pub character_name: String,
    pub role: String,
}

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where `Titles.csv` and `Credits.csv` are written. Must exist.
    pub out_dir: PathBuf,
    /// Number of titles to generate.
    pub titles: u64,
    /// Number of credits to generate.
    pub credits: u64,
    /// First id handed out in each batch.
    pub start_id: i64,
    /// Seed for reproducible output; random when absent.
    pub seed: Option<u64>,
    /// Also write `generation_report.json` next to the CSV files.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            titles: 100,
            credits: 100,
            start_id: 0,
            seed: None,
            write_report: false,
        }
    }
}

/// Summary of one exported table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub path: PathBuf,
    pub rows_generated: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub seed: Option<u64>,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, started_at: String, seed: Option<u64>) -> Self {
        Self {
            run_id,
            started_at,
            seed,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: TableReport) {
        self.bytes_written = self.bytes_written.saturating_add(table.bytes_written);
        self.tables.push(table);
    }

    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|table| table.table == name)
    }
}
