// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tree traversal — enumerates matching documents under a root directory and
// turns each into report rows via the document inspector.
//
// Ordering contract: pre-order, files before subdirectories, both in the
// platform's native directory-listing order. The report row sequence is the
// authoritative output, so this ordering is part of the external contract.

use std::io;
use std::path::{Path, PathBuf};

use blattwerk_core::error::{BlattwerkError, Result};
use blattwerk_core::types::{FileFailure, PageRecord, ReportRow};
use blattwerk_document::{DocumentInspector, Inspection};
use tracing::{info, instrument, warn};

/// Everything a completed walk produced.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Report rows in canonical traversal order.
    pub rows: Vec<ReportRow>,
    /// Total matching files encountered, including failed ones.
    pub files_seen: u64,
    /// Documents whose page count succeeded but whose geometry or render
    /// extraction failed; they contribute zero rows.
    pub extraction_failures: u64,
}

/// Recursive directory walker driving a [`DocumentInspector`].
pub struct TreeWalker<I: DocumentInspector> {
    inspector: I,
    extension: String,
}

impl<I: DocumentInspector> TreeWalker<I> {
    /// `extension` is matched case-insensitively, without the dot.
    pub fn new(inspector: I, extension: impl Into<String>) -> Self {
        Self {
            inspector,
            extension: extension.into(),
        }
    }

    /// Walk `root` and collect one row per page, or one failure row per
    /// unopenable document.
    ///
    /// Only an unreadable root is fatal. Unreadable subdirectories and
    /// entries are logged and skipped; per-document failures become data.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn walk(&self, root: &Path) -> Result<WalkOutcome> {
        let listing = read_listing(root).map_err(|err| {
            BlattwerkError::RootAccess(format!("{}: {}", root.display(), err))
        })?;

        let mut rows = Vec::new();
        let mut extraction_failures = 0u64;
        let files_seen = self.process(listing, &mut rows, &mut extraction_failures);

        let outcome = WalkOutcome {
            rows,
            files_seen,
            extraction_failures,
        };
        info!(
            files = outcome.files_seen,
            rows = outcome.rows.len(),
            extraction_failures = outcome.extraction_failures,
            "walk complete"
        );
        Ok(outcome)
    }

    /// Handle one directory listing: matching files first, then recurse.
    /// Returns the number of matching files seen, folded up the recursion
    /// instead of threading a shared counter through it.
    fn process(
        &self,
        listing: Listing,
        rows: &mut Vec<ReportRow>,
        extraction_failures: &mut u64,
    ) -> u64 {
        let mut seen = 0u64;

        for file in &listing.files {
            if !self.matches_extension(file) {
                continue;
            }
            seen += 1;
            self.inspect_file(file, rows, extraction_failures);
        }

        for subdir in &listing.dirs {
            match read_listing(subdir) {
                Ok(sub_listing) => {
                    seen += self.process(sub_listing, rows, extraction_failures);
                }
                Err(err) => {
                    warn!(dir = %subdir.display(), %err, "skipping unreadable directory");
                }
            }
        }
        seen
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension.as_str()))
    }

    /// Inspect one document and append its rows. A document contributes
    /// either all of its page rows, exactly one failure row, or (extraction
    /// failure) zero rows plus a counted diagnostic — never a partial mix.
    fn inspect_file(
        &self,
        path: &Path,
        rows: &mut Vec<ReportRow>,
        extraction_failures: &mut u64,
    ) {
        let directory = path
            .parent()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.inspector.inspect(path) {
            Inspection::Pages(pages) => {
                for (index, page) in pages.iter().enumerate() {
                    let record = PageRecord {
                        directory: directory.clone(),
                        file_name: file_name.clone(),
                        // 1-based in the report regardless of internal indexing.
                        page_index: (index + 1) as u32,
                        size: page.size,
                        color: page.color,
                    };
                    info!(
                        file = %file_name,
                        page = record.page_index,
                        size = %record.size,
                        color = %record.color,
                        "page"
                    );
                    rows.push(ReportRow::Page(record));
                }
            }
            Inspection::OpenFailed { reason } => {
                rows.push(ReportRow::Failure(FileFailure {
                    directory,
                    file_name,
                    reason,
                }));
            }
            Inspection::ExtractionFailed { pages, reason } => {
                // Zero rows for this document; the signal survives in the
                // outcome counter and the log.
                warn!(
                    file = %file_name,
                    pages,
                    %reason,
                    "document counted but not extracted; emitting no rows"
                );
                *extraction_failures += 1;
            }
        }
    }
}

/// One directory's entries, split by kind, native listing order preserved.
struct Listing {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

fn read_listing(dir: &Path) -> io::Result<Listing> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), %err, "skipping unreadable entry");
                continue;
            }
        };
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => dirs.push(entry.path()),
            Ok(file_type) if file_type.is_file() => files.push(entry.path()),
            Ok(_) => {} // sockets, fifos, dangling symlinks
            Err(err) => {
                warn!(path = %entry.path().display(), %err, "cannot stat entry");
            }
        }
    }
    Ok(Listing { files, dirs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blattwerk_core::types::{ColorVerdict, SizeVerdict};
    use blattwerk_document::PageSummary;

    /// Scripted inspector: behavior keyed by file name.
    ///
    /// `fail-*.pdf` fails to open, `half-*.pdf` fails extraction, `<n>p-*.pdf`
    /// produces n monochrome Unknown pages, anything else produces one page.
    struct ScriptedInspector;

    impl DocumentInspector for ScriptedInspector {
        fn inspect(&self, path: &Path) -> Inspection {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            if name.starts_with("fail-") {
                return Inspection::OpenFailed {
                    reason: "scripted open failure".into(),
                };
            }
            if name.starts_with("half-") {
                return Inspection::ExtractionFailed {
                    pages: 5,
                    reason: "scripted extraction failure".into(),
                };
            }
            let pages = name
                .split_once('p')
                .and_then(|(n, _)| n.parse::<usize>().ok())
                .unwrap_or(1);
            Inspection::Pages(vec![
                PageSummary {
                    size: SizeVerdict::Unknown,
                    color: ColorVerdict::Monochrome,
                };
                pages
            ])
        }
    }

    fn walker() -> TreeWalker<ScriptedInspector> {
        TreeWalker::new(ScriptedInspector, "pdf")
    }

    fn touch(path: &Path) {
        std::fs::write(path, b"stub").unwrap();
    }

    #[test]
    fn missing_root_is_fatal() {
        let err = walker().walk(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, BlattwerkError::RootAccess(_)));
    }

    /// Pre-order: every file in the root is reported before anything from a
    /// subdirectory, and each document's pages stay contiguous and 1-based.
    #[test]
    fn files_precede_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("2p-root.pdf"));
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        touch(&sub.join("3p-nested.pdf"));

        let outcome = walker().walk(dir.path()).unwrap();
        assert_eq!(outcome.files_seen, 2);
        assert_eq!(outcome.rows.len(), 5);

        let names: Vec<&str> = outcome
            .rows
            .iter()
            .map(|row| match row {
                ReportRow::Page(page) => page.file_name.as_str(),
                ReportRow::Failure(failure) => failure.file_name.as_str(),
            })
            .collect();
        assert_eq!(
            names,
            [
                "2p-root.pdf",
                "2p-root.pdf",
                "3p-nested.pdf",
                "3p-nested.pdf",
                "3p-nested.pdf"
            ]
        );

        let indices: Vec<u32> = outcome
            .rows
            .iter()
            .map(|row| match row {
                ReportRow::Page(page) => page.page_index,
                ReportRow::Failure(_) => 0,
            })
            .collect();
        assert_eq!(indices, [1, 2, 1, 2, 3]);
    }

    /// One corrupt and one valid 3-page document: exactly one failure row and
    /// exactly three page rows, nothing dropped, nothing partial.
    #[test]
    fn failure_isolation() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("fail-corrupt.pdf"));
        touch(&dir.path().join("3p-good.pdf"));

        let outcome = walker().walk(dir.path()).unwrap();
        assert_eq!(outcome.files_seen, 2);

        let failures: Vec<&FileFailure> = outcome
            .rows
            .iter()
            .filter_map(|row| match row {
                ReportRow::Failure(failure) => Some(failure),
                ReportRow::Page(_) => None,
            })
            .collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].file_name, "fail-corrupt.pdf");

        let page_rows = outcome
            .rows
            .iter()
            .filter(|row| matches!(row, ReportRow::Page(_)))
            .count();
        assert_eq!(page_rows, 3);
    }

    /// Extraction failure after a good page count: zero rows, one counted
    /// diagnostic, file still counted as seen.
    #[test]
    fn extraction_failure_yields_zero_rows() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("half-rendered.pdf"));

        let outcome = walker().walk(dir.path()).unwrap();
        assert_eq!(outcome.files_seen, 1);
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.extraction_failures, 1);
    }

    /// Extension matching is case-insensitive and non-matching files are
    /// invisible to the walk.
    #[test]
    fn extension_filter() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("upper.PDF"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("noext"));

        let outcome = walker().walk(dir.path()).unwrap();
        assert_eq!(outcome.files_seen, 1);
        assert_eq!(outcome.rows.len(), 1);
    }
}
