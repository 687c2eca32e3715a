mod logging;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use marquee_generate::generators::catalog::{AGE_CERTIFICATIONS, ROLES};
use marquee_generate::{Credit, GenerateOptions, GenerationEngine, GenerationError, Record, Title};
use thiserror::Error;

use logging::init_logging;
use settings::{SettingsError, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "marquee",
    version,
    about = "Generate synthetic Titles.csv and Credits.csv test data"
)]
struct Cli {
    /// Path to a TOML config file (defaults to ./marquee.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate both CSV files (the default).
    Generate(GenerateArgs),
    /// List the columns and value lists used by the generators.
    Rules,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Existing directory to write the CSV files into.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Number of titles to generate.
    #[arg(long)]
    titles: Option<u64>,
    /// Number of credits to generate.
    #[arg(long)]
    credits: Option<u64>,
    /// First id of each batch.
    #[arg(long)]
    start_id: Option<i64>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Write generation_report.json next to the CSV files (`--report false`
    /// turns off a report enabled in the config file).
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    report: Option<bool>,
}

impl GenerateArgs {
    /// Flags win over config file values.
    fn apply(self, mut options: GenerateOptions) -> GenerateOptions {
        if let Some(out) = self.out {
            options.out_dir = out;
        }
        if let Some(titles) = self.titles {
            options.titles = titles;
        }
        if let Some(credits) = self.credits {
            options.credits = credits;
        }
        if let Some(start_id) = self.start_id {
            options.start_id = start_id;
        }
        if self.seed.is_some() {
            options.seed = self.seed;
        }
        if let Some(report) = self.report {
            options.write_report = report;
        }
        options
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    match cli.command {
        Some(Command::Rules) => {
            print_rules();
            Ok(())
        }
        Some(Command::Generate(args)) => run_generate(cli.config, args),
        None => run_generate(cli.config, GenerateArgs::default()),
    }
}

fn run_generate(config: Option<PathBuf>, args: GenerateArgs) -> Result<(), CliError> {
    let cwd = std::env::current_dir().map_err(SettingsError::from)?;
    let settings = load_settings(config.as_deref(), &cwd)?;
    let options = args.apply(settings.generate);

    let report = GenerationEngine::new(options).run()?;
    for table in &report.tables {
        println!(
            "{}={} rows={}",
            table.table,
            table.path.display(),
            table.rows_generated
        );
    }
    Ok(())
}

fn print_rules() {
    println!(
        "{} ({}): {}",
        Title::TABLE,
        Title::FILE_NAME,
        Title::COLUMNS.join(",")
    );
    println!(
        "{} ({}): {}",
        Credit::TABLE,
        Credit::FILE_NAME,
        Credit::COLUMNS.join(",")
    );
    println!("AgeCertification: {}", AGE_CERTIFICATIONS.join(", "));
    println!("Role: {}", ROLES.join(", "));
}
