/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::image::{Image, CHANNELS};
use crate::rgb::quantize;
use nalgebra::{Matrix3, Vector3};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// `output = A * (pixel - source_mean) + reference_mean`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub matrix: Matrix3<f64>,
    pub source_mean: Vector3<f64>,
    pub reference_mean: Vector3<f64>,
}

impl AffineTransform {
    #[inline]
    pub fn map(&self, pixel: Vector3<f64>) -> Vector3<f64> {
        self.matrix * (pixel - self.source_mean) + self.reference_mean
    }

    /// Maps every pixel, clipping and truncating the result to 8-bit.
    pub fn apply(&self, image: &Image) -> Image {
        let mut dst = vec![0u8; image.as_slice().len()];

        let iter;

        #[cfg(feature = "rayon")]
        {
            iter = dst
                .par_chunks_exact_mut(CHANNELS)
                .zip(image.as_slice().par_chunks_exact(CHANNELS));
        }
        #[cfg(not(feature = "rayon"))]
        {
            iter = dst
                .chunks_exact_mut(CHANNELS)
                .zip(image.as_slice().chunks_exact(CHANNELS));
        }

        iter.for_each(|(dst, src)| {
            let mapped = self.map(Vector3::new(src[0] as f64, src[1] as f64, src[2] as f64));
            dst[0] = quantize(mapped.x);
            dst[1] = quantize(mapped.y);
            dst[2] = quantize(mapped.z);
        });

        Image::from_vec_unchecked(image.width(), image.height(), dst)
    }
}

/// One dimensional `output = (value - source_mean) * scale + reference_mean`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMap {
    pub scale: f64,
    pub source_mean: f64,
    pub reference_mean: f64,
}

impl ChannelMap {
    /// Moment matching between two 1-D Gaussians.
    ///
    /// A zero source deviation is replaced by 1 so the map stays defined.
    pub fn gaussian(source: (f64, f64), reference: (f64, f64)) -> Self {
        let (source_mean, source_std) = source;
        let (reference_mean, reference_std) = reference;
        let source_std = if source_std > 0f64 {
            source_std
        } else {
            tracing::trace!("zero source deviation, using unit scale");
            1f64
        };
        Self {
            scale: reference_std / source_std,
            source_mean,
            reference_mean,
        }
    }

    /// Moment matching with the source deviation clamped from below by `floor`.
    pub fn gaussian_floored(source: (f64, f64), reference: (f64, f64), floor: f64) -> Self {
        let (source_mean, source_std) = source;
        let (reference_mean, reference_std) = reference;
        if source_std < floor {
            tracing::trace!(source_std, floor, "source deviation below floor");
        }
        Self {
            scale: reference_std / source_std.max(floor),
            source_mean,
            reference_mean,
        }
    }

    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        (value - self.source_mean) * self.scale + self.reference_mean
    }
}
