// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// blattwerk-document — Document processing for the Blattwerk page inventory.
//
// Provides the PDF capabilities (metadata decoding via lopdf, page
// rasterisation via pdfium), the two page classifiers (paper size and
// colour), and the per-document inspector that ties them together.

pub mod classify;
pub mod inspect;
pub mod pdf;

// Re-export the primary types so callers can use `blattwerk_document::PdfInspector` etc.
pub use classify::color::PageColorClassifier;
pub use classify::geometry::PageGeometryClassifier;
pub use inspect::{DocumentInspector, Inspection, PageSummary, PdfInspector};
pub use pdf::metadata::LopdfDecoder;
pub use pdf::render::PdfiumRenderer;
