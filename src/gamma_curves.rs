/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// Decodes a gamma encoded sRGB component in `0..=1` into linear light.
#[inline(always)]
pub fn srgb_to_linear(gamma: f64) -> f64 {
    if gamma > 0.04045f64 {
        ((gamma + 0.055f64) / 1.055f64).powf(2.4f64)
    } else {
        gamma / 12.92f64
    }
}

/// Encodes a linear light component back into sRGB gamma.
#[inline(always)]
pub fn srgb_from_linear(linear: f64) -> f64 {
    if linear > 0.0031308f64 {
        1.055f64 * linear.powf(1f64 / 2.4f64) - 0.055f64
    } else {
        12.92f64 * linear
    }
}
