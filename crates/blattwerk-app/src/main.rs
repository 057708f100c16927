// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blattwerk — PDF page inventory
//
// Entry point. Initialises logging, resolves configuration, runs the walk,
// and writes the CSV report. Per-document failures are report rows, not
// process failures: the exit code is non-zero only when the root directory
// cannot be read, the report cannot be written, or the renderer cannot bind.

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use tracing::{error, info};

use blattwerk_core::error::Result;
use blattwerk_core::ScanConfig;
use blattwerk_document::{LopdfDecoder, PdfInspector, PdfiumRenderer};
use blattwerk_report::{CsvReportWriter, TreeWalker};

/// Walks a directory tree and reports paper size and colour for every PDF
/// page as CSV.
#[derive(Debug, Parser)]
#[command(name = "blattwerk", version)]
struct Cli {
    /// Root directory to scan for PDF files.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Report destination; defaults to a timestamped CSV in the current
    /// directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Render resolution in dots per inch.
    #[arg(long)]
    dpi: Option<f32>,

    /// JSON configuration file. Command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&config) {
        error!(%err, "scan aborted");
        std::process::exit(1);
    }
}

/// Configuration file values first, then command-line overrides.
fn load_config(cli: &Cli) -> Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => ScanConfig::default(),
    };
    if let Some(input) = &cli.input {
        config.input_dir = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = Some(output.clone());
    }
    if let Some(dpi) = cli.dpi {
        config.render_dpi = dpi;
    }
    Ok(config)
}

fn run(config: &ScanConfig) -> Result<()> {
    let started = Local::now();
    info!(
        input = %config.input_dir.display(),
        dpi = config.render_dpi,
        start = %started.format("%Y/%m/%d %H:%M:%S"),
        "scan starting"
    );

    let renderer = PdfiumRenderer::new(config.render_dpi)?;
    let inspector = PdfInspector::new(LopdfDecoder::new(), renderer);
    let walker = TreeWalker::new(inspector, config.extension.clone());

    let outcome = walker.walk(&config.input_dir)?;

    let output_path = config.resolved_output_path(started);
    let mut writer = CsvReportWriter::create(&output_path)?;
    writer.write_all(&outcome.rows)?;
    writer.finish()?;

    let finished = Local::now();
    info!(
        end = %finished.format("%Y/%m/%d %H:%M:%S"),
        elapsed_secs = (finished - started).num_milliseconds() as f64 / 1000.0,
        files = outcome.files_seen,
        rows = outcome.rows.len(),
        extraction_failures = outcome.extraction_failures,
        report = %output_path.display(),
        "scan complete"
    );
    Ok(())
}
