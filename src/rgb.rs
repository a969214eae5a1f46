/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Default)]
/// Represents any RGB values, Rgb<u8>, Rgb<f64> etc.
pub struct Rgb<T> {
    /// Red component
    pub r: T,
    /// Green component
    pub g: T,
    /// Blue component
    pub b: T,
}

impl<T> Rgb<T> {
    #[inline]
    pub fn new(r: T, g: T, b: T) -> Rgb<T> {
        Rgb { r, g, b }
    }
}

impl Rgb<u8> {
    #[inline]
    pub fn from_slice(px: &[u8]) -> Rgb<u8> {
        Rgb::new(px[0], px[1], px[2])
    }
}

impl Rgb<f64> {
    /// Clips normalized components into `0..=1` and truncates them to 8-bit
    #[inline]
    pub fn to_u8(&self) -> Rgb<u8> {
        Rgb::new(
            quantize_unit(self.r),
            quantize_unit(self.g),
            quantize_unit(self.b),
        )
    }
}

#[inline(always)]
fn quantize_unit(v: f64) -> u8 {
    quantize(v * 255f64)
}

/// Clips a sample into `0..=255` and truncates the fraction.
///
/// NaN becomes 0.
#[inline(always)]
pub fn quantize(v: f64) -> u8 {
    #[allow(clippy::manual_clamp)]
    let clipped = v.max(0f64).min(255f64);
    clipped as u8
}
