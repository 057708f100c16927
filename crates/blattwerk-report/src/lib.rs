// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// blattwerk-report — Tree traversal and report output for the Blattwerk
// page inventory.
//
// The walker drives the document inspector over a directory tree in a fixed
// pre-order and collects one row per page (or per failed file); the sink
// persists those rows as CSV.

pub mod sink;
pub mod walk;

pub use sink::CsvReportWriter;
pub use walk::{TreeWalker, WalkOutcome};
