/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::rgb::Rgb;
use crate::xyz::Xyz;
use crate::xyz_transform::D65_WHITE_POINT;

const DELTA: f64 = 6f64 / 29f64;
/// `(6/29)^3`, threshold on normalized XYZ
const EPSILON: f64 = DELTA * DELTA * DELTA;
/// `1 / (3 * (6/29)^2)`, slope of the linear segment
const KAPPA: f64 = 1f64 / (3f64 * DELTA * DELTA);
const OFFSET: f64 = 16f64 / 116f64;

/// Scale between CIE lightness (0 to 100) and its 8-bit compatible storage (0 to 255)
pub const L_STORAGE_SCALE: f64 = 255f64 / 100f64;
/// Offset applied to `a` and `b` so they share the 8-bit domain
pub const AB_STORAGE_OFFSET: f64 = 128f64;

/// Represents CIELAB color space against D65 white point.
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq)]
pub struct Lab {
    /// `l`: lightness component (0 to 100)
    pub l: f64,
    /// `a`: green (negative) and red (positive) component.
    pub a: f64,
    /// `b`: blue (negative) and yellow (positive) component
    pub b: f64,
}

#[inline(always)]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA * t + OFFSET
    }
}

#[inline(always)]
fn lab_f_inv(f: f64) -> f64 {
    if f > DELTA {
        f * f * f
    } else {
        (f - OFFSET) / KAPPA
    }
}

impl Lab {
    /// Create a new CIELAB color.
    ///
    /// `l`: lightness component (0 to 100)
    ///
    /// `a`: green (negative) and red (positive) component.
    ///
    /// `b`: blue (negative) and yellow (positive) component.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts to CIE Lab from CIE XYZ
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D65_WHITE_POINT[0]);
        let fy = lab_f(xyz.y / D65_WHITE_POINT[1]);
        let fz = lab_f(xyz.z / D65_WHITE_POINT[2]);
        Self::new(116f64 * fy - 16f64, 500f64 * (fx - fy), 200f64 * (fy - fz))
    }

    /// Converts CIE Lab into CIE XYZ
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l + 16f64) / 116f64;
        let fx = fy + self.a / 500f64;
        let fz = fy - self.b / 200f64;
        Xyz::new(
            lab_f_inv(fx) * D65_WHITE_POINT[0],
            lab_f_inv(fy) * D65_WHITE_POINT[1],
            lab_f_inv(fz) * D65_WHITE_POINT[2],
        )
    }

    /// Converts to CIE Lab from sRGB
    #[inline]
    pub fn from_rgb(rgb: Rgb<u8>) -> Self {
        Self::from_xyz(Xyz::from_srgb(rgb))
    }

    /// Converts into sRGB, clipped and truncated to 8-bit
    #[inline]
    pub fn to_rgb(&self) -> Rgb<u8> {
        self.to_xyz().to_srgb_f64().to_u8()
    }

    /// Rescales into the 8-bit compatible layout: `L * 255 / 100`, `a + 128`, `b + 128`
    #[inline]
    pub fn to_storage(&self) -> [f64; 3] {
        [
            self.l * L_STORAGE_SCALE,
            self.a + AB_STORAGE_OFFSET,
            self.b + AB_STORAGE_OFFSET,
        ]
    }

    /// Inverse of [Lab::to_storage]
    #[inline]
    pub fn from_storage(stored: [f64; 3]) -> Self {
        Self::new(
            stored[0] / L_STORAGE_SCALE,
            stored[1] - AB_STORAGE_OFFSET,
            stored[2] - AB_STORAGE_OFFSET,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_and_black() {
        let white = Lab::from_rgb(Rgb::new(255, 255, 255));
        assert!((white.l - 100.).abs() < 1e-3);
        assert!(white.a.abs() < 0.05);
        assert!(white.b.abs() < 0.05);

        let black = Lab::from_rgb(Rgb::new(0, 0, 0));
        assert!(black.l.abs() < 1e-9);
        assert!(black.a.abs() < 1e-9);
        assert!(black.b.abs() < 1e-9);
    }

    #[test]
    fn test_known_red() {
        // Reference values for sRGB (255, 0, 0) under D65
        let red = Lab::from_rgb(Rgb::new(255, 0, 0));
        assert!((red.l - 53.24).abs() < 0.05, "{:?}", red);
        assert!((red.a - 80.09).abs() < 0.1, "{:?}", red);
        assert!((red.b - 67.20).abs() < 0.1, "{:?}", red);
    }

    #[test]
    fn test_piecewise_threshold_is_continuous() {
        let below = lab_f(EPSILON - 1e-12);
        let above = lab_f(EPSILON + 1e-12);
        assert!((below - above).abs() < 1e-9);
        assert!((lab_f_inv(lab_f(0.004)) - 0.004).abs() < 1e-12);
        assert!((lab_f_inv(lab_f(0.5)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_storage_layout() {
        let lab = Lab::new(50., -20., 30.);
        let stored = lab.to_storage();
        assert!((stored[0] - 127.5).abs() < 1e-12);
        assert_eq!(stored[1], 108.);
        assert_eq!(stored[2], 158.);
        let back = Lab::from_storage(stored);
        assert!((back.l - 50.).abs() < 1e-12);
        assert_eq!(back.a, -20.);
        assert_eq!(back.b, 30.);
    }

    #[test]
    fn test_rgb_round_trip() {
        for &(r, g, b) in &[(0u8, 0u8, 0u8), (255, 255, 255), (18, 200, 77), (128, 64, 250)] {
            let rgb = Rgb::new(r, g, b);
            let back = Lab::from_rgb(rgb).to_rgb();
            assert!((back.r as i32 - r as i32).abs() <= 1, "{back:?}");
            assert!((back.g as i32 - g as i32).abs() <= 1, "{back:?}");
            assert!((back.b as i32 - b as i32).abs() <= 1, "{back:?}");
        }
    }
}
