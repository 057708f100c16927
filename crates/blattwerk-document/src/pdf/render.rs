// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page rasterisation — renders PDF pages to in-memory images via the
// `pdfium-render` crate. This is the second, independent decode path next to
// the lopdf metadata side; colour classification needs actual pixels.

use std::path::Path;

use blattwerk_core::error::BlattwerkError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use tracing::{debug, instrument};

use crate::inspect::{PageRenderer, RenderSession};

/// Render capability backed by pdfium.
///
/// Binds the pdfium library once at construction: first a bundled copy next
/// to the executable, then the system library.
pub struct PdfiumRenderer {
    pdfium: Pdfium,
    dpi: f32,
}

impl PdfiumRenderer {
    /// Bind pdfium and fix the render resolution (dots per inch, applied to
    /// both axes).
    pub fn new(dpi: f32) -> Result<Self, BlattwerkError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|err| {
                BlattwerkError::RenderError(format!("failed to bind pdfium library: {}", err))
            })?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
            dpi,
        })
    }
}

impl PageRenderer for PdfiumRenderer {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn RenderSession + 'a>, BlattwerkError> {
        let document = self.pdfium.load_pdf_from_file(path, None).map_err(|err| {
            BlattwerkError::RenderError(format!(
                "failed to open {} for rendering: {}",
                path.display(),
                err
            ))
        })?;
        debug!(pages = document.pages().len(), "PDF opened for rendering");
        Ok(Box::new(PdfiumSession {
            document,
            dpi: self.dpi,
        }))
    }
}

/// One open document on the render side.
struct PdfiumSession<'a> {
    document: PdfDocument<'a>,
    dpi: f32,
}

impl RenderSession for PdfiumSession<'_> {
    fn render_page(&self, index: usize) -> Result<DynamicImage, BlattwerkError> {
        let pages = self.document.pages();
        let page = pages
            .get(index as u16)
            .map_err(|err| BlattwerkError::RenderError(format!("no page {}: {}", index, err)))?;

        // Pixel dimensions from the page's point size: 72 points per inch.
        let scale = self.dpi / 72.0;
        let pixel_width = (page.width().value * scale) as i32;
        let pixel_height = (page.height().value * scale) as i32;

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(pixel_width)
                    .set_target_height(pixel_height)
                    .render_form_data(true)
                    .render_annotations(true),
            )
            .map_err(|err| {
                BlattwerkError::RenderError(format!("rendering page {} failed: {}", index, err))
            })?;

        Ok(bitmap.as_image())
    }
}
