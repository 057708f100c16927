// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Blattwerk.

use thiserror::Error;

/// Top-level error type for all Blattwerk operations.
///
/// Only `RootAccess` and `ReportWrite` are fatal to a run; everything else is
/// caught at the document boundary and converted into report rows.
#[derive(Debug, Error)]
pub enum BlattwerkError {
    // -- Fatal (abort the run) --
    #[error("input directory unreadable: {0}")]
    RootAccess(String),

    #[error("cannot write report: {0}")]
    ReportWrite(String),

    // -- Document errors (recovered per file) --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("page render failed: {0}")]
    RenderError(String),

    // -- Plumbing --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BlattwerkError>;
