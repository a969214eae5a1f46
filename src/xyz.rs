/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::gamma_curves::{srgb_from_linear, srgb_to_linear};
use crate::rgb::Rgb;
use crate::xyz_transform::{SRGB_TO_XYZ_D65, XYZ_TO_SRGB_D65};

/// A CIE 1931 XYZ color, Y normalized to `0..=1`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[inline(always)]
fn mul_matrix(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let mut out = [0f64; 3];
    for (dst, row) in out.iter_mut().zip(matrix.iter()) {
        *dst = row[0].mul_add(v[0], row[1].mul_add(v[1], row[2] * v[2]));
    }
    out
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts linear RGB in `0..=1` with the given RGB to XYZ matrix
    #[inline]
    pub fn from_linear_rgb(rgb: Rgb<f64>, matrix: &[[f64; 3]; 3]) -> Self {
        let [x, y, z] = mul_matrix(matrix, [rgb.r, rgb.g, rgb.b]);
        Self::new(x, y, z)
    }

    /// Converts into linear RGB with the given XYZ to RGB matrix, no clipping applied
    #[inline]
    pub fn to_linear_rgb(&self, matrix: &[[f64; 3]; 3]) -> Rgb<f64> {
        let [r, g, b] = mul_matrix(matrix, [self.x, self.y, self.z]);
        Rgb::new(r, g, b)
    }

    /// This function always uses sRGB transfer function with D65 White point
    #[inline]
    pub fn from_srgb(rgb: Rgb<u8>) -> Self {
        const SCALE: f64 = 1f64 / 255f64;
        let linear = Rgb::new(
            srgb_to_linear(rgb.r as f64 * SCALE),
            srgb_to_linear(rgb.g as f64 * SCALE),
            srgb_to_linear(rgb.b as f64 * SCALE),
        );
        Xyz::from_linear_rgb(linear, &SRGB_TO_XYZ_D65)
    }

    /// Gamma encoded sRGB in `0..=1`, values outside of gamut are not clipped
    #[inline]
    pub fn to_srgb_f64(&self) -> Rgb<f64> {
        let linear = self.to_linear_rgb(&XYZ_TO_SRGB_D65);
        Rgb::new(
            srgb_from_linear(linear.r),
            srgb_from_linear(linear.g),
            srgb_from_linear(linear.b),
        )
    }
}
