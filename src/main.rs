use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use welcome_letters::config::ExtractorConfig;
use welcome_letters::excel;
use welcome_letters::extractor::Extractor;
use welcome_letters::json_export;
use welcome_letters::utils;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spreadsheet to scan (.xlsx, .xls, .xlsm, .ods or .csv)
    #[arg(required = true)]
    file_path: PathBuf,

    /// Output workbook path (defaults to a timestamped name in the current directory)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Print the result as JSON to stdout instead of writing a workbook
    #[arg(long, short = 'j')]
    json: bool,

    /// Also write the result as JSON to this file
    #[arg(long, value_name = "FILE")]
    json_out: Option<PathBuf>,

    /// JSON file overriding the extractor's column positions and exclusion lists
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Columns to try for the name before scanning the whole row, e.g. 7,8,9
    #[arg(long, value_delimiter = ',')]
    name_columns: Option<Vec<usize>>,

    /// Largest accepted input file in bytes
    #[arg(long, default_value_t = utils::DEFAULT_MAX_FILE_SIZE)]
    max_size: u64,

    /// Report what would be extracted without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    utils::validate_spreadsheet_path(&cli.file_path)?;
    let size = std::fs::metadata(&cli.file_path)
        .with_context(|| format!("Unable to read file: {}", cli.file_path.display()))?
        .len();
    utils::check_file_size(size, cli.max_size)?;

    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::from_file(path)?,
        None => ExtractorConfig::default(),
    };
    if let Some(columns) = cli.name_columns {
        config.preferred_name_columns = columns;
    }
    config.validate()?;

    let (sheet_name, grid) = excel::read_grid_with_sheet(&cli.file_path)?;
    info!(
        "Read worksheet '{}' from {} ({})",
        sheet_name,
        cli.file_path.display(),
        utils::format_file_size(size)
    );

    let result = Extractor::new(config).process(&grid);

    eprintln!("Total rows: {}", result.total_rows);
    eprintln!("Records found: {}", result.processed_rows);

    if result.is_empty() {
        eprintln!("No data records containing 'WELCOME LETTER' were found");
    }

    if let Some(path) = &cli.json_out {
        json_export::export_json(&result, path)?;
        eprintln!("Saved JSON result to {}", path.display());
    }

    if cli.json {
        println!("{}", json_export::serialize_to_json(&result)?);
        return Ok(());
    }

    if result.is_empty() {
        return Ok(());
    }

    if cli.dry_run {
        for record in &result.records {
            println!(
                "{}\t{}\t{}",
                record.full_name, record.first_name, record.description
            );
        }
        return Ok(());
    }

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(excel::default_output_name(Utc::now())));
    excel::write_records(&result.records, &output)?;
    eprintln!("Saved {} records to {}", result.records.len(), output.display());

    Ok(())
}
