// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Classification module — paper-size matching and colour detection.

pub mod color;
pub mod geometry;

pub use color::PageColorClassifier;
pub use geometry::PageGeometryClassifier;
