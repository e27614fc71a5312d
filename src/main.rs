//! tagscan - symbol tagging with documentation extraction.
//!
//! Finds candidate symbol definitions with per-language pattern rules and
//! attaches the documentation comment found directly above each one.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tagscan::config::{Args, Command, Config, OutputFormat};
use tagscan::service::{ScanReport, ScanService};
use tagscan::tags::{extract_documentation_at_row, split_lines, AnalyzeOptions, Analyzer};
use tagscan::VERSION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = Config::from(&args);
    info!("tagscan v{}", VERSION);

    let table = config
        .load_table()
        .await
        .context("Failed to load language table")?;

    match args.command {
        Command::Scan {
            paths,
            glob,
            no_docs,
            no_fargs,
            format,
        } => {
            let analyzer = Arc::new(Analyzer::new(&table)?);
            let mut service = ScanService::new(analyzer, &config).with_options(AnalyzeOptions {
                extract_documentation: !no_docs,
                guess_fargs: !no_fargs,
            });
            if let Some(pattern) = glob {
                service = service.with_include(&pattern)?;
            }

            let report = service.scan(&paths).await?;
            print_report(&report, format)?;
        }
        Command::Doc { file, row } => {
            let contents = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let lines = split_lines(&contents);
            match extract_documentation_at_row(&lines, row) {
                Some(doc) => println!("{}", doc),
                None => info!("No documentation at row {}", row),
            }
        }
        Command::Imports { path, open } => {
            let analyzer = Analyzer::new(&table)?;
            for candidate in analyzer.matching_open_files(&path, &open) {
                println!("{}", candidate);
            }
        }
        Command::Languages { name: None } => {
            print!("{}", serde_yaml::to_string(&table)?);
        }
        Command::Languages { name: Some(name) } => {
            print!("{}", serde_yaml::to_string(table.language(&name)?)?);
        }
    }

    Ok(())
}

fn print_report(report: &ScanReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(report)?),
        OutputFormat::Text => {
            for file in &report.files {
                if let Some(error) = &file.error {
                    println!("{}: error: {}", file.path, error);
                    continue;
                }
                for tag in &file.tags {
                    println!(
                        "{}:{}: {} {}{}",
                        file.path,
                        tag.row + 1,
                        tag.kind,
                        tag.name,
                        tag.fargs.as_deref().unwrap_or("")
                    );
                }
            }
        }
    }
    Ok(())
}
