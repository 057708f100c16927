// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF metadata decoding — page count and per-page geometry using the
// `lopdf` crate. Rendering lives in `render.rs`; this side never touches
// page content streams.

use std::path::Path;

use blattwerk_core::error::BlattwerkError;
use blattwerk_core::types::PageGeometry;
use lopdf::{Document, Object, ObjectId};
use tracing::{debug, instrument};

use crate::inspect::{DocumentMetadata, MetadataDecoder};

/// Metadata capability backed by `lopdf`.
///
/// Opens documents in a structure-only fashion: the page tree is resolved,
/// page content is never decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfDecoder;

impl LopdfDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataDecoder for LopdfDecoder {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentMetadata>, BlattwerkError> {
        let document = Document::load(path).map_err(|err| {
            BlattwerkError::PdfError(format!("failed to open {}: {}", path.display(), err))
        })?;

        // get_pages() walks the page tree; fix the order here so page indices
        // are stable for the lifetime of the handle.
        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();
        debug!(pages = page_ids.len(), "PDF structure loaded");

        Ok(Box::new(LopdfDocument { document, page_ids }))
    }
}

/// An opened document handle serving page count and geometry queries.
pub struct LopdfDocument {
    document: Document,
    /// Page object IDs in physical page order.
    page_ids: Vec<ObjectId>,
}

impl DocumentMetadata for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_geometry(&self, index: usize) -> Result<PageGeometry, BlattwerkError> {
        let page_id = *self.page_ids.get(index).ok_or_else(|| {
            BlattwerkError::PdfError(format!(
                "page index {} out of range ({} pages)",
                index,
                self.page_ids.len()
            ))
        })?;

        let media_box = self.resolve_media_box(page_id)?;
        let width = (media_box[2] - media_box[0]).abs();
        let height = (media_box[3] - media_box[1]).abs();
        Ok(PageGeometry::new(width, height))
    }
}

impl LopdfDocument {
    /// Locate the effective `/MediaBox` for a page, walking `/Parent` links
    /// for inherited values as the PDF spec requires.
    fn resolve_media_box(&self, page_id: ObjectId) -> Result<[f64; 4], BlattwerkError> {
        let mut current = page_id;
        // Malformed files can have /Parent cycles; bound the climb.
        for _ in 0..32 {
            let dict = self
                .document
                .get_object(current)
                .and_then(Object::as_dict)
                .map_err(|err| {
                    BlattwerkError::PdfError(format!(
                        "cannot read page dictionary {:?}: {}",
                        current, err
                    ))
                })?;

            if let Ok(value) = dict.get(b"MediaBox") {
                return self.parse_rectangle(value);
            }

            match dict.get(b"Parent") {
                Ok(Object::Reference(parent_id)) => current = *parent_id,
                _ => break,
            }
        }
        Err(BlattwerkError::PdfError(format!(
            "page {:?} has no /MediaBox (own or inherited)",
            page_id
        )))
    }

    /// Decode a `[x0 y0 x1 y1]` rectangle, resolving an indirect reference if
    /// the value is one.
    fn parse_rectangle(&self, value: &Object) -> Result<[f64; 4], BlattwerkError> {
        let value = match value {
            Object::Reference(id) => self.document.get_object(*id).map_err(|err| {
                BlattwerkError::PdfError(format!("cannot resolve /MediaBox reference: {}", err))
            })?,
            other => other,
        };
        let array = value
            .as_array()
            .map_err(|err| BlattwerkError::PdfError(format!("/MediaBox is not an array: {}", err)))?;
        if array.len() != 4 {
            return Err(BlattwerkError::PdfError(format!(
                "/MediaBox has {} elements, expected 4",
                array.len()
            )));
        }

        let mut rect = [0.0f64; 4];
        for (slot, object) in rect.iter_mut().zip(array) {
            *slot = match object {
                Object::Integer(value) => *value as f64,
                Object::Real(value) => *value as f64,
                other => {
                    return Err(BlattwerkError::PdfError(format!(
                        "/MediaBox element is not numeric: {:?}",
                        other
                    )));
                }
            };
        }
        Ok(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    /// Build a two-page PDF in memory: an A4 page with its own /MediaBox and
    /// a page inheriting the box from the /Pages node.
    fn sample_pdf(path: &Path) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let page_a = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(595.28),
                Object::Real(841.89),
            ],
        });
        let page_b = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_a.into(), page_b.into()],
            "Count" => 2,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(841.89),
                Object::Real(1190.55),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn page_count_and_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pdf");
        sample_pdf(&path);

        let handle = LopdfDecoder::new().open(&path).unwrap();
        assert_eq!(handle.page_count(), 2);

        let first = handle.page_geometry(0).unwrap();
        assert!((first.width_pt - 595.28).abs() < 0.01);
        assert!((first.height_pt - 841.89).abs() < 0.01);

        // Second page inherits the A3 box from /Pages.
        let second = handle.page_geometry(1).unwrap();
        assert!((second.width_pt - 841.89).abs() < 0.01);
        assert!((second.height_pt - 1190.55).abs() < 0.01);
    }

    #[test]
    fn out_of_range_index_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pdf");
        sample_pdf(&path);

        let handle = LopdfDecoder::new().open(&path).unwrap();
        assert!(handle.page_geometry(2).is_err());
    }

    #[test]
    fn garbage_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();

        assert!(LopdfDecoder::new().open(&path).is_err());
    }
}
