/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// sRGB to XYZ transformation matrix, D65 White point
pub const SRGB_TO_XYZ_D65: [[f64; 3]; 3] = [
    [0.412391f64, 0.357584f64, 0.180481f64],
    [0.212639f64, 0.715169f64, 0.072192f64],
    [0.019331f64, 0.119195f64, 0.950532f64],
];

/// XYZ to sRGB transformation matrix, D65 White point
pub const XYZ_TO_SRGB_D65: [[f64; 3]; 3] = [
    [3.240970f64, -1.537383f64, -0.498611f64],
    [-0.969244f64, 1.875968f64, 0.041555f64],
    [0.055630f64, -0.203977f64, 1.056972f64],
];

/// D65 reference white, Y normalized to 1
pub const D65_WHITE_POINT: [f64; 3] = [0.95047f64, 1.00000f64, 1.08883f64];
