// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scan run configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for one inventory run.
///
/// Deserialises leniently: omitted fields take their defaults, so a config
/// file can be partial.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Root directory to walk for documents.
    pub input_dir: PathBuf,
    /// Report destination. `None` means a timestamped file in the current
    /// directory (see [`ScanConfig::default_output_name`]).
    pub output_path: Option<PathBuf>,
    /// Resolution for page rasterisation, dots per inch (horizontal and
    /// vertical).
    pub render_dpi: f32,
    /// File extension to match, without the dot, compared case-insensitively.
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_path: None,
            render_dpi: 300.0,
            extension: "pdf".to_string(),
        }
    }
}

impl ScanConfig {
    /// Default report file name for a run starting at `now`, e.g.
    /// `20260829153000_pdf_files.csv`.
    pub fn default_output_name(now: chrono::DateTime<chrono::Local>) -> String {
        format!("{}_pdf_files.csv", now.format("%Y%m%d%H%M%S"))
    }

    /// The report path to use: the configured one, or the timestamped default.
    pub fn resolved_output_path(&self, now: chrono::DateTime<chrono::Local>) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::default_output_name(now)))
    }
}
