// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour detection — decides whether a rendered page contains any colour at
// all, using a strict per-pixel channel-equality test.

use blattwerk_core::types::ColorVerdict;
use image::DynamicImage;

/// Classifies a rendered page as colour or monochrome.
///
/// A pixel is "coloured" when its red, green, and blue channels are not all
/// equal. This is deliberately a strict equality test, not a perceptual
/// threshold: a single anti-aliasing artifact that shifts one channel by one
/// unit makes the page colour. The alpha channel is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageColorClassifier;

impl PageColorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Scan the image in row-major order and return the verdict.
    ///
    /// Short-circuits on the first coloured pixel; the result is identical to
    /// a full scan.
    pub fn classify(&self, image: &DynamicImage) -> ColorVerdict {
        let rgb = image.to_rgb8();
        for pixel in rgb.pixels() {
            let image::Rgb([r, g, b]) = *pixel;
            if r != g || g != b {
                return ColorVerdict::Color;
            }
        }
        ColorVerdict::Monochrome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn classify(image: RgbImage) -> ColorVerdict {
        PageColorClassifier::new().classify(&DynamicImage::ImageRgb8(image))
    }

    /// Varying gray values are still monochrome as long as R == G == B holds
    /// for every pixel.
    #[test]
    fn gray_gradient_is_monochrome() {
        let img = RgbImage::from_fn(64, 64, |x, y| {
            let v = ((x + y) % 256) as u8;
            Rgb([v, v, v])
        });
        assert_eq!(classify(img), ColorVerdict::Monochrome);
    }

    /// One pixel with a single channel off by one unit flips the verdict.
    #[test]
    fn single_off_channel_pixel_is_color() {
        let mut img = RgbImage::from_pixel(32, 32, Rgb([128, 128, 128]));
        img.put_pixel(31, 17, Rgb([129, 128, 128]));
        assert_eq!(classify(img), ColorVerdict::Color);
    }

    #[test]
    fn one_by_one_images() {
        assert_eq!(
            classify(RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]))),
            ColorVerdict::Monochrome
        );
        assert_eq!(
            classify(RgbImage::from_pixel(1, 1, Rgb([0, 0, 1]))),
            ColorVerdict::Color
        );
    }

    /// Alpha is ignored: a translucent gray stays monochrome.
    #[test]
    fn alpha_channel_is_ignored() {
        let rgba = image::RgbaImage::from_pixel(8, 8, image::Rgba([77, 77, 77, 13]));
        let verdict =
            PageColorClassifier::new().classify(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(verdict, ColorVerdict::Monochrome);
    }
}
