/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Multivariate Gaussian whitening and recoloring.
//!
//! The map is `A = sqrt(cov_ref) * inv_sqrt(cov_src)`, which is generally not
//! symmetric and therefore not the optimal transport solution, see [crate::mkl]
//! for that one.
use crate::affine::{AffineTransform, ChannelMap};
use crate::channels::match_lightness;
use crate::converter::ColorConverter;
use crate::image::Image;
use crate::spd::{sqrt_and_inv_sqrt, COVARIANCE_EPSILON};
use crate::statistics::{mean_std, PixelStatistics};

/// Whitening-recoloring transform between the pixel clouds of two images
pub fn transform(source: &Image, reference: &Image) -> AffineTransform {
    let source_stats = PixelStatistics::from_interleaved(source.as_slice());
    let reference_stats = PixelStatistics::from_interleaved(reference.as_slice());

    let (reference_sqrt, _) = sqrt_and_inv_sqrt(&reference_stats.covariance, COVARIANCE_EPSILON);
    let (_, source_inv_sqrt) = sqrt_and_inv_sqrt(&source_stats.covariance, COVARIANCE_EPSILON);

    AffineTransform {
        matrix: reference_sqrt * source_inv_sqrt,
        source_mean: source_stats.mean,
        reference_mean: reference_stats.mean,
    }
}

pub fn match_rgb(source: &Image, reference: &Image) -> Image {
    transform(source, reference).apply(source)
}

/// Lightness only, where the map reduces to a 1-D Gaussian moment match
pub fn match_lab_l(source: &Image, reference: &Image, converter: &dyn ColorConverter) -> Image {
    match_lightness(source, reference, converter, gaussian_lightness)
}

fn gaussian_lightness(source: &[f32], reference: &[f32]) -> Vec<f32> {
    let map = ChannelMap::gaussian(mean_std(source), mean_std(reference));
    source.iter().map(|&v| map.map(v as f64) as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::CieLab;
    use crate::Rgb;
    use nalgebra::Matrix3;

    fn noisy(width: u32, height: u32, seed: u32) -> Image {
        let mut state = seed;
        let mut data = Vec::new();
        for _ in 0..width * height {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            let r = (state >> 16) as u8;
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            let g = ((state >> 16) as u8 / 2).wrapping_add(r / 3);
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            let b = (state >> 16) as u8 / 4 + 40;
            data.extend_from_slice(&[r, g, b]);
        }
        Image::new(width, height, data).unwrap()
    }

    #[test]
    fn test_self_transform_is_identity() {
        let image = noisy(16, 16, 7);
        let t = transform(&image, &image);
        assert!((t.matrix - Matrix3::identity()).abs().max() < 1e-9);
        let out = match_rgb(&image, &image);
        for (a, b) in image.as_slice().iter().zip(out.as_slice().iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_matrix_is_whitening_recoloring() {
        let source = noisy(16, 16, 1);
        let reference = noisy(8, 8, 99);
        let t = transform(&source, &reference);
        let s = PixelStatistics::from_interleaved(source.as_slice());
        let r = PixelStatistics::from_interleaved(reference.as_slice());
        let (r_sqrt, _) = sqrt_and_inv_sqrt(&r.covariance, COVARIANCE_EPSILON);
        let (s_sqrt, _) = sqrt_and_inv_sqrt(&s.covariance, COVARIANCE_EPSILON);
        // A * sqrt(cov_src) recovers sqrt(cov_ref)
        assert!((t.matrix * s_sqrt - r_sqrt).abs().max() < 1e-6);
    }

    #[test]
    fn test_flat_source_moves_to_reference_mean() {
        let source = Image::filled(4, 4, Rgb::new(10, 20, 30)).unwrap();
        let reference = Image::filled(2, 2, Rgb::new(100, 150, 200)).unwrap();
        let out = match_rgb(&source, &reference);
        assert!(out.pixels().all(|px| px == Rgb::new(100, 150, 200)));
    }

    #[test]
    fn test_gaussian_lightness_with_flat_source() {
        let out = gaussian_lightness(&[50., 50.], &[10., 30.]);
        assert_eq!(out, vec![20., 20.]);
    }

    #[test]
    fn test_lab_l_self_match() {
        let image = noisy(8, 8, 3);
        let out = match_lab_l(&image, &image, &CieLab);
        for (a, b) in image.as_slice().iter().zip(out.as_slice().iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 2);
        }
    }
}
