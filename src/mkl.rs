/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Monge-Kantorovich linearization: the closed form optimal transport map
//! between the Gaussians fitted to the source and reference pixel clouds.
use crate::affine::{AffineTransform, ChannelMap};
use crate::channels::match_lightness;
use crate::converter::ColorConverter;
use crate::image::Image;
use crate::spd::{mat_sqrt, sqrt_and_inv_sqrt, COVARIANCE_EPSILON};
use crate::statistics::{mean_std, PixelStatistics};

/// Lower bound on the source lightness deviation of the 1-D map
const LIGHTNESS_STD_FLOOR: f64 = 1e-6;

/// `A = Ss^-1/2 (Ss^1/2 Sr Ss^1/2)^1/2 Ss^-1/2`, symmetric and satisfying `A Ss A = Sr`
pub fn transform(source: &Image, reference: &Image) -> AffineTransform {
    let source_stats = PixelStatistics::from_interleaved(source.as_slice());
    let reference_stats = PixelStatistics::from_interleaved(reference.as_slice());

    let (source_sqrt, source_inv_sqrt) =
        sqrt_and_inv_sqrt(&source_stats.covariance, COVARIANCE_EPSILON);
    let middle = mat_sqrt(&(source_sqrt * reference_stats.covariance * source_sqrt));

    AffineTransform {
        matrix: source_inv_sqrt * middle * source_inv_sqrt,
        source_mean: source_stats.mean,
        reference_mean: reference_stats.mean,
    }
}

pub fn match_rgb(source: &Image, reference: &Image) -> Image {
    transform(source, reference).apply(source)
}

/// Lightness only; in one dimension the transport map is the Gaussian moment match
pub fn match_lab_l(source: &Image, reference: &Image, converter: &dyn ColorConverter) -> Image {
    match_lightness(source, reference, converter, transport_lightness)
}

fn transport_lightness(source: &[f32], reference: &[f32]) -> Vec<f32> {
    let map = ChannelMap::gaussian_floored(
        mean_std(source),
        mean_std(reference),
        LIGHTNESS_STD_FLOOR,
    );
    source.iter().map(|&v| map.map(v as f64) as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::CieLab;
    use crate::Rgb;
    use nalgebra::Matrix3;

    /// Four affinely independent colors repeated, so covariances are full rank
    fn pattern(colors: [Rgb<u8>; 4]) -> Image {
        let pixels: Vec<Rgb<u8>> = (0..36).map(|i| colors[i % 4]).collect();
        Image::from_pixels(6, 6, &pixels).unwrap()
    }

    #[test]
    fn test_transform_is_symmetric_transport() {
        let source = pattern([
            Rgb::new(20, 40, 60),
            Rgb::new(200, 90, 10),
            Rgb::new(60, 180, 120),
            Rgb::new(10, 10, 230),
        ]);
        let reference = pattern([
            Rgb::new(250, 240, 10),
            Rgb::new(30, 20, 200),
            Rgb::new(120, 10, 90),
            Rgb::new(0, 200, 60),
        ]);
        let t = transform(&source, &reference);
        assert!((t.matrix - t.matrix.transpose()).abs().max() < 1e-8);

        let s = PixelStatistics::from_interleaved(source.as_slice());
        let r = PixelStatistics::from_interleaved(reference.as_slice());
        let pushed = t.matrix * s.covariance * t.matrix;
        let relative = (pushed - r.covariance).abs().max() / r.covariance.abs().max();
        assert!(relative < 1e-6, "{pushed}\n{}", r.covariance);
    }

    #[test]
    fn test_self_match_is_identity() {
        let image = pattern([
            Rgb::new(5, 5, 5),
            Rgb::new(100, 30, 220),
            Rgb::new(250, 200, 0),
            Rgb::new(60, 240, 90),
        ]);
        let t = transform(&image, &image);
        assert!((t.matrix - Matrix3::identity()).abs().max() < 1e-6);
        let out = match_rgb(&image, &image);
        for (a, b) in image.as_slice().iter().zip(out.as_slice().iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_flat_source_moves_to_reference_mean() {
        let source = Image::filled(3, 3, Rgb::new(1, 2, 3)).unwrap();
        let reference = pattern([
            Rgb::new(0, 0, 0),
            Rgb::new(80, 40, 0),
            Rgb::new(40, 120, 20),
            Rgb::new(0, 40, 100),
        ]);
        let out = match_rgb(&source, &reference);
        assert!(out.pixels().all(|px| px == Rgb::new(30, 50, 30)));
    }

    #[test]
    fn test_lightness_deviation_is_floored() {
        // deviation ~5e-8 is raised to 1e-6, the spread stays within 0.1 of the mean
        let source = [1f32, 1., 1., 1. + f32::EPSILON];
        let out = transport_lightness(&source, &[0., 2.]);
        for v in out {
            assert!((v - 1.).abs() < 0.1, "{v}");
        }
    }

    #[test]
    fn test_lab_l_of_nearly_flat_lightness() {
        // both colors sit at L' ~50.1053, 3.3e-6 apart
        let mut pixels = vec![Rgb::new(42, 39, 102); 199];
        pixels.push(Rgb::new(45, 45, 72));
        let source = Image::from_pixels(20, 10, &pixels).unwrap();
        let reference = Image::new(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
        let out = match_lab_l(&source, &reference, &CieLab);
        let lightness = out.to_lab().channel(0);
        assert!((lightness[0] - 127.5).abs() < 5., "{}", lightness[0]);
    }
}
