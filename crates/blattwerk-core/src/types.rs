// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Blattwerk page inventory.

use serde::{Deserialize, Serialize};

/// One entry of the reference paper-size catalog, in points (1/72 inch).
///
/// The aspect ratio is always derived from the stored dimensions so the two
/// can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperSizeSpec {
    pub name: &'static str,
    pub width_pt: f64,
    pub height_pt: f64,
}

impl PaperSizeSpec {
    pub const fn new(name: &'static str, width_pt: f64, height_pt: f64) -> Self {
        Self {
            name,
            width_pt,
            height_pt,
        }
    }

    /// Width over height of the portrait reference dimensions.
    pub fn aspect_ratio(&self) -> f64 {
        self.width_pt / self.height_pt
    }
}

/// The fixed, ordered catalog of ISO A-series sizes, A0 through A10.
///
/// Values are the PdfSharp point dimensions. The ordering matters: size
/// matching iterates A0→A10 and resolves ties toward the earlier entry.
pub const PAPER_CATALOG: [PaperSizeSpec; 11] = [
    PaperSizeSpec::new("A0", 2384.65, 3370.79),
    PaperSizeSpec::new("A1", 1683.78, 2384.65),
    PaperSizeSpec::new("A2", 1190.55, 1683.78),
    PaperSizeSpec::new("A3", 841.89, 1190.55),
    PaperSizeSpec::new("A4", 595.28, 841.89),
    PaperSizeSpec::new("A5", 419.53, 595.28),
    PaperSizeSpec::new("A6", 297.64, 419.53),
    PaperSizeSpec::new("A7", 209.76, 297.64),
    PaperSizeSpec::new("A8", 147.40, 209.76),
    PaperSizeSpec::new("A9", 104.88, 147.40),
    PaperSizeSpec::new("A10", 73.70, 104.88),
];

/// Measured dimensions of a single page, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width_pt: f64,
    pub height_pt: f64,
}

impl PageGeometry {
    pub fn new(width_pt: f64, height_pt: f64) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }
}

/// Page orientation relative to the portrait catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Fixed label suffix used in the report.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Result of matching a page against the paper-size catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SizeVerdict {
    Matched {
        name: &'static str,
        orientation: Orientation,
    },
    Unknown,
}

impl SizeVerdict {
    /// Report label, e.g. `"A4-portrait"`, `"A3-landscape"`, or `"unknown"`.
    pub fn label(&self) -> String {
        match self {
            Self::Matched { name, orientation } => format!("{}-{}", name, orientation.suffix()),
            Self::Unknown => "unknown".to_string(),
        }
    }
}

impl std::fmt::Display for SizeVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Color classification of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorVerdict {
    Color,
    Monochrome,
}

impl ColorVerdict {
    /// Fixed report label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Monochrome => "monochrome",
        }
    }
}

impl std::fmt::Display for ColorVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One successfully classified page. `page_index` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    pub directory: String,
    pub file_name: String,
    pub page_index: u32,
    pub size: SizeVerdict,
    pub color: ColorVerdict,
}

/// A document that could not be opened or whose page count could not be read.
///
/// Emitted in place of page records; the report encodes it with a `-1`
/// page-count sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileFailure {
    pub directory: String,
    pub file_name: String,
    pub reason: String,
}

/// One row of the report: a classified page or a per-file failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReportRow {
    Page(PageRecord),
    Failure(FileFailure),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ordered_a0_to_a10() {
        assert_eq!(PAPER_CATALOG.len(), 11);
        assert_eq!(PAPER_CATALOG[0].name, "A0");
        assert_eq!(PAPER_CATALOG[10].name, "A10");
        // Each size is strictly smaller than its predecessor.
        for pair in PAPER_CATALOG.windows(2) {
            assert!(pair[1].width_pt < pair[0].width_pt);
            assert!(pair[1].height_pt < pair[0].height_pt);
        }
    }

    #[test]
    fn aspect_ratio_is_derived() {
        let a4 = PAPER_CATALOG[4];
        assert_eq!(a4.name, "A4");
        assert!((a4.aspect_ratio() - 595.28 / 841.89).abs() < f64::EPSILON);
    }

    #[test]
    fn size_verdict_labels() {
        let matched = SizeVerdict::Matched {
            name: "A4",
            orientation: Orientation::Landscape,
        };
        assert_eq!(matched.label(), "A4-landscape");
        assert_eq!(SizeVerdict::Unknown.label(), "unknown");
    }

    #[test]
    fn color_verdict_labels() {
        assert_eq!(ColorVerdict::Color.label(), "color");
        assert_eq!(ColorVerdict::Monochrome.label(), "monochrome");
    }
}
