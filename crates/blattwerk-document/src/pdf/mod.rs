// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — structural metadata decoding and page rasterisation.

pub mod metadata;
pub mod render;

pub use metadata::LopdfDecoder;
pub use render::PdfiumRenderer;
