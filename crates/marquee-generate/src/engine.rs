use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::generators::{GeneratorContext, Record, generate_batch, id_overflow};
use crate::ids::IdSequence;
use crate::model::{Credit, GenerateOptions, GenerationReport, TableReport, Title};
use crate::output::csv::write_records_csv;

/// Entry point for generating the title and credit files.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    context: GeneratorContext,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_context(options, GeneratorContext::now())
    }

    /// Engine with a fixed context, e.g. a pinned current year.
    pub fn with_context(options: GenerateOptions, context: GeneratorContext) -> Self {
        Self { options, context }
    }

    /// Generate and export titles, then credits. The first failure aborts the run.
    pub fn run(&self) -> Result<GenerationReport, GenerationError> {
        self.validate()?;

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let mut report = GenerationReport::new(run_id.clone(), started_at, self.options.seed);

        info!(
            run_id = %run_id,
            out_dir = %self.options.out_dir.display(),
            titles = self.options.titles,
            credits = self.options.credits,
            seed = ?self.options.seed,
            "generation started"
        );

        let outcome = self
            .run_table::<Title>(self.options.titles, &mut report)
            .and_then(|()| self.run_table::<Credit>(self.options.credits, &mut report));
        report.duration_ms = start.elapsed().as_millis() as u64;

        if let Err(err) = outcome {
            warn!(run_id = %run_id, error = %err, "generation failed");
            return Err(err);
        }

        if self.options.write_report {
            let report_path = self.options.out_dir.join(crate::REPORT_FILE);
            std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
            info!(path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            duration_ms = report.duration_ms,
            bytes_written = report.bytes_written,
            "generation completed"
        );
        Ok(report)
    }

    /// Id ranges are checked before any file is written.
    fn validate(&self) -> Result<(), GenerationError> {
        self.validate_table::<Title>(self.options.titles)?;
        self.validate_table::<Credit>(self.options.credits)
    }

    fn validate_table<T: Record>(&self, rows: u64) -> Result<(), GenerationError> {
        let ids = IdSequence::new(self.options.start_id);
        if ids.has_room_for(rows) {
            Ok(())
        } else {
            Err(id_overflow::<T>(rows, &ids))
        }
    }

    fn run_table<T: Record>(
        &self,
        rows: u64,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let table_start = Instant::now();
        let mut rng = table_rng(self.options.seed, T::TABLE);
        let mut ids = IdSequence::new(self.options.start_id);

        info!(table = T::TABLE, rows, "generating table");
        let records: Vec<T> = generate_batch(&self.context, rows, &mut ids, &mut rng)?;

        let path = self.options.out_dir.join(T::FILE_NAME);
        let summary = write_records_csv(&path, &records)?;
        let duration_ms = table_start.elapsed().as_millis() as u64;

        info!(
            table = T::TABLE,
            path = %path.display(),
            rows_generated = summary.rows,
            bytes_written = summary.bytes,
            duration_ms,
            "table generated"
        );

        report.record_table(TableReport {
            table: T::TABLE.to_string(),
            path,
            rows_generated: summary.rows,
            bytes_written: summary.bytes,
            duration_ms,
        });
        Ok(())
    }
}

/// One stream per table; seeded streams are keyed by the table name.
fn table_rng(seed: Option<u64>, table: &str) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(hash_seed(seed, table)),
        None => ChaCha8Rng::from_os_rng(),
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
