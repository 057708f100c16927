// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document inspection — one document in, per-page verdicts out.
//
// Two capability seams mirror the two decode paths: structural metadata
// (page count, geometry) and rasterisation (pixels for colour detection).
// They fail in different ways and the distinction is part of the report
// contract, so the seams stay separate even though both concrete
// implementations open the same file.

use std::path::Path;

use blattwerk_core::error::BlattwerkError;
use blattwerk_core::types::{ColorVerdict, PageGeometry, SizeVerdict};
use image::DynamicImage;
use tracing::{debug, instrument, warn};

use crate::classify::{PageColorClassifier, PageGeometryClassifier};

/// Structural metadata capability: open a document without touching page
/// content.
pub trait MetadataDecoder {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentMetadata>, BlattwerkError>;
}

/// An opened document on the metadata side.
pub trait DocumentMetadata {
    fn page_count(&self) -> usize;
    /// Stored page dimensions in points, zero-based index.
    fn page_geometry(&self, index: usize) -> Result<PageGeometry, BlattwerkError>;
}

/// Rasterisation capability: open a document for rendering.
pub trait PageRenderer {
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn RenderSession + 'a>, BlattwerkError>;
}

/// An opened document on the render side.
pub trait RenderSession {
    /// Render one page to an RGB(A) raster, zero-based index.
    fn render_page(&self, index: usize) -> Result<DynamicImage, BlattwerkError>;
}

/// Size and colour verdicts for one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSummary {
    pub size: SizeVerdict,
    pub color: ColorVerdict,
}

/// Outcome of inspecting one document.
///
/// The two failure variants are distinct on purpose: an open/page-count
/// failure becomes a report row, while an extraction failure after a good
/// page count yields zero rows and only a diagnostic signal.
#[derive(Debug, Clone, PartialEq)]
pub enum Inspection {
    /// One summary per page, physical page order.
    Pages(Vec<PageSummary>),
    /// The document could not be opened or its page count read.
    OpenFailed { reason: String },
    /// The page count was read but geometry or rendering failed.
    ExtractionFailed { pages: usize, reason: String },
}

/// Inspects a single document: page count, then per-page size and colour.
pub trait DocumentInspector {
    fn inspect(&self, path: &Path) -> Inspection;
}

/// The standard inspector wiring: a metadata decoder, a page renderer, and
/// the two classifiers.
pub struct PdfInspector<D: MetadataDecoder, R: PageRenderer> {
    decoder: D,
    renderer: R,
    geometry: PageGeometryClassifier,
    color: PageColorClassifier,
}

impl<D: MetadataDecoder, R: PageRenderer> PdfInspector<D, R> {
    pub fn new(decoder: D, renderer: R) -> Self {
        Self {
            decoder,
            renderer,
            geometry: PageGeometryClassifier::new(),
            color: PageColorClassifier::new(),
        }
    }

    /// Classify every page. Any error here is an extraction failure; the
    /// caller still knows the page count succeeded.
    fn extract_pages(
        &self,
        path: &Path,
        metadata: &dyn DocumentMetadata,
        count: usize,
    ) -> Result<Vec<PageSummary>, BlattwerkError> {
        let session = self.renderer.open(path)?;
        let mut pages = Vec::with_capacity(count);

        for index in 0..count {
            let PageGeometry {
                width_pt,
                height_pt,
            } = metadata.page_geometry(index)?;
            let size = self.geometry.classify(width_pt, height_pt);

            // The raster lives only inside this block: at 300 DPI an A4 page
            // is ~25 MP, so it must be gone before the next page renders.
            let color = {
                let raster = session.render_page(index)?;
                self.color.classify(&raster)
            };

            debug!(page = index + 1, size = %size, color = %color, "page classified");
            pages.push(PageSummary { size, color });
        }
        Ok(pages)
    }
}

impl<D: MetadataDecoder, R: PageRenderer> DocumentInspector for PdfInspector<D, R> {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn inspect(&self, path: &Path) -> Inspection {
        let metadata = match self.decoder.open(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(%err, "cannot open document");
                return Inspection::OpenFailed {
                    reason: err.to_string(),
                };
            }
        };

        let count = metadata.page_count();
        match self.extract_pages(path, metadata.as_ref(), count) {
            Ok(pages) => Inspection::Pages(pages),
            Err(err) => {
                warn!(%err, pages = count, "page extraction failed after successful page count");
                Inspection::ExtractionFailed {
                    pages: count,
                    reason: err.to_string(),
                }
            }
        }
    }
}
