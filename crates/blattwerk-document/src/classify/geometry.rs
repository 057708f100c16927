// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Paper-size classification — matches measured page dimensions against the
// fixed A0–A10 catalog.

use blattwerk_core::types::{Orientation, SizeVerdict, PAPER_CATALOG};

/// Reference dimensions the tolerance is derived from (A4 portrait, points).
const BASE_WIDTH_PT: f64 = 595.28;
const BASE_HEIGHT_PT: f64 = 841.89;

/// Absolute tolerance on `widthDiff + heightDiff`: 2% of the longer A4 edge.
const SIZE_TOLERANCE_PT: f64 = if BASE_WIDTH_PT > BASE_HEIGHT_PT {
    BASE_WIDTH_PT * 0.02
} else {
    BASE_HEIGHT_PT * 0.02
};

/// Tolerance on the aspect-ratio difference.
const RATIO_TOLERANCE: f64 = 0.01;

/// Matches page dimensions against the standard paper-size catalog.
///
/// A candidate qualifies when the additive width+height error stays under a
/// fixed tolerance AND the aspect ratio is close to the catalog entry's. The
/// second gate rejects pages whose edge errors happen to cancel out, such as
/// a wide thin strip with the same perimeter as a catalog size.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageGeometryClassifier;

impl PageGeometryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a page by its width and height in points.
    ///
    /// The measured dimensions are normalised to portrait (short edge first)
    /// before comparison, so a landscape page matches the same catalog entry
    /// as its portrait twin; the orientation is taken from the raw ordering,
    /// landscape only when strictly wider than tall. The catalog is walked
    /// A0→A10, keeping the entry with the strictly smallest size diff; on an
    /// exact tie the earlier (larger) size wins. Non-positive or non-finite
    /// dimensions classify as `Unknown`.
    pub fn classify(&self, width_pt: f64, height_pt: f64) -> SizeVerdict {
        if !(width_pt > 0.0) || !(height_pt > 0.0) || !width_pt.is_finite() || !height_pt.is_finite()
        {
            return SizeVerdict::Unknown;
        }

        let orientation = if width_pt > height_pt {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        let short_pt = width_pt.min(height_pt);
        let long_pt = width_pt.max(height_pt);
        let aspect_ratio = short_pt / long_pt;

        let mut min_diff = f64::MAX;
        let mut best: Option<&'static str> = None;

        for entry in &PAPER_CATALOG {
            let width_diff = (short_pt - entry.width_pt).abs();
            let height_diff = (long_pt - entry.height_pt).abs();
            let size_diff = width_diff + height_diff;
            let ratio_diff = (aspect_ratio - entry.aspect_ratio()).abs();

            if size_diff < SIZE_TOLERANCE_PT && ratio_diff < RATIO_TOLERANCE && size_diff < min_diff
            {
                min_diff = size_diff;
                best = Some(entry.name);
            }
        }

        match best {
            Some(name) => SizeVerdict::Matched { name, orientation },
            None => SizeVerdict::Unknown,
        }
    }
}
