// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CSV report sink — persists the row sequence produced by the walker.
//
// Row shapes:
//   header       directory,fileName,pageCount,pageIndex,paperSize,color
//   page row     <dir>,<file>,1,<index>,<size label>,<color label>
//   failure row  <dir>,<file>,-1            (three fields, -1 sentinel)

use std::path::Path;

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::types::ReportRow;
use csv::{Writer, WriterBuilder};
use tracing::{debug, instrument};

const HEADER: [&str; 6] = [
    "directory",
    "fileName",
    "pageCount",
    "pageIndex",
    "paperSize",
    "color",
];

/// Writes report rows to a CSV file.
///
/// Failure rows are shorter than page rows, so the writer runs in flexible
/// mode.
#[derive(Debug)]
pub struct CsvReportWriter {
    writer: Writer<std::fs::File>,
}

impl CsvReportWriter {
    /// Create the report file (truncating any existing one) and write the
    /// header. Creation failure is fatal to the run.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())
            .map_err(|err| {
                BlattwerkError::ReportWrite(format!("{}: {}", path.as_ref().display(), err))
            })?;
        writer.write_record(HEADER)?;
        debug!("report created");
        Ok(Self { writer })
    }

    pub fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        match row {
            ReportRow::Page(page) => {
                let index = page.page_index.to_string();
                let size = page.size.label();
                self.writer.write_record([
                    page.directory.as_str(),
                    page.file_name.as_str(),
                    "1",
                    index.as_str(),
                    size.as_str(),
                    page.color.label(),
                ])?
            }
            ReportRow::Failure(failure) => self.writer.write_record([
                failure.directory.as_str(),
                failure.file_name.as_str(),
                "-1",
            ])?,
        }
        Ok(())
    }

    pub fn write_all<'a>(&mut self, rows: impl IntoIterator<Item = &'a ReportRow>) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Flush buffered rows to disk.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
