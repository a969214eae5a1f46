/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::image::CHANNELS;
use nalgebra::{Matrix3, Vector3};
use num_traits::AsPrimitive;

/// Population mean and standard deviation (divisor `n`).
///
/// Both are zero for an empty slice.
pub fn mean_std<T: AsPrimitive<f64>>(values: &[T]) -> (f64, f64) {
    if values.is_empty() {
        return (0f64, 0f64);
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|v| v.as_()).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| {
            let d = v.as_() - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

/// Mean vector and biased covariance of a pixel cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelStatistics {
    pub mean: Vector3<f64>,
    pub covariance: Matrix3<f64>,
}

impl PixelStatistics {
    /// Statistics over interleaved 3 channel samples.
    ///
    /// Covariance divides by the pixel count, not `count - 1`.
    pub fn from_interleaved<T: AsPrimitive<f64>>(samples: &[T]) -> Self {
        let count = samples.len() / CHANNELS;
        if count == 0 {
            return Self {
                mean: Vector3::zeros(),
                covariance: Matrix3::zeros(),
            };
        }
        let n = count as f64;

        let mut mean = Vector3::<f64>::zeros();
        for px in samples.chunks_exact(CHANNELS) {
            mean += Vector3::new(px[0].as_(), px[1].as_(), px[2].as_());
        }
        mean /= n;

        let mut covariance = Matrix3::<f64>::zeros();
        for px in samples.chunks_exact(CHANNELS) {
            let d = Vector3::new(px[0].as_(), px[1].as_(), px[2].as_()) - mean;
            covariance += d * d.transpose();
        }
        covariance /= n;

        Self { mean, covariance }
    }
}
