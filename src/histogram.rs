/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::channels::{match_lightness, match_planes};
use crate::converter::ColorConverter;
use crate::image::Image;
use crate::rgb::quantize;

const LEVELS: usize = 256;

/// Normalized cumulative histogram of 8-bit samples, last entry is 1.
fn cumulative_histogram(values: &[u8]) -> [f64; LEVELS] {
    let mut counts = [0u64; LEVELS];
    for &v in values {
        counts[v as usize] += 1;
    }
    let mut cdf = [0f64; LEVELS];
    let mut running = 0u64;
    for (dst, count) in cdf.iter_mut().zip(counts.iter()) {
        running += count;
        *dst = running as f64;
    }
    let total = cdf[LEVELS - 1];
    if total > 0f64 {
        for v in cdf.iter_mut() {
            *v /= total;
        }
    }
    cdf
}

/// Intensity level at which `cdf` reaches `q`, linearly interpolated.
///
/// On flat runs of `cdf` the lowest level holding the value wins, queries
/// below the first entry resolve to level 0.
fn inverse_cdf(cdf: &[f64; LEVELS], q: f64) -> f64 {
    let j = cdf.partition_point(|&c| c < q);
    if j == 0 {
        return 0f64;
    }
    if j == LEVELS {
        return (LEVELS - 1) as f64;
    }
    if cdf[j] == q {
        return j as f64;
    }
    let (lo, hi) = (cdf[j - 1], cdf[j]);
    (j - 1) as f64 + (q - lo) / (hi - lo)
}

/// 256 entry table sending source levels to reference levels with matching CDF.
///
/// Interpolated levels are truncated.
pub fn lookup_table(source: &[u8], reference: &[u8]) -> [u8; LEVELS] {
    let source_cdf = cumulative_histogram(source);
    let reference_cdf = cumulative_histogram(reference);
    let mut lut = [0u8; LEVELS];
    for (dst, &q) in lut.iter_mut().zip(source_cdf.iter()) {
        *dst = inverse_cdf(&reference_cdf, q).trunc() as u8;
    }
    lut
}

/// Histogram matching of a single channel
pub fn match_channel(source: &[u8], reference: &[u8]) -> Vec<u8> {
    let lut = lookup_table(source, reference);
    source.iter().map(|&v| lut[v as usize]).collect()
}

/// Histogram matching of R, G and B independently
pub fn match_rgb(source: &Image, reference: &Image) -> Image {
    match_planes(source, reference, match_channel)
}

/// Histogram matching of the Lab lightness only.
///
/// Lightness is truncated to 8-bit levels before the histograms are built.
pub fn match_lab_l(source: &Image, reference: &Image, converter: &dyn ColorConverter) -> Image {
    match_lightness(source, reference, converter, |src, reference| {
        let src: Vec<u8> = src.iter().map(|&v| quantize(v as f64)).collect();
        let reference: Vec<u8> = reference.iter().map(|&v| quantize(v as f64)).collect();
        match_channel(&src, &reference)
            .into_iter()
            .map(|v| v as f32)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::CieLab;
    use crate::Rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cdf_is_normalized() {
        let cdf = cumulative_histogram(&[0, 0, 3, 255]);
        assert_eq!(cdf[0], 0.5);
        assert_eq!(cdf[2], 0.5);
        assert_eq!(cdf[3], 0.75);
        assert_eq!(cdf[254], 0.75);
        assert_eq!(cdf[255], 1.);
    }

    #[test]
    fn test_ties_resolve_to_lowest_level() {
        // reference only holds levels 10 and 200, its CDF is flat over 10..200
        let reference = [10u8, 10, 200, 200];
        let source = [0u8, 0, 255, 255];
        let lut = lookup_table(&source, &reference);
        assert_eq!(lut[0], 10);
        assert_eq!(lut[128], 10);
        assert_eq!(lut[255], 200);
        assert_eq!(match_channel(&source, &reference), vec![10, 10, 200, 200]);
    }

    #[test]
    fn test_interpolates_between_levels() {
        let mut cdf = [1f64; LEVELS];
        cdf[0] = 0.25;
        cdf[1] = 0.75;
        assert_eq!(inverse_cdf(&cdf, 0.5), 0.5);
        assert_eq!(inverse_cdf(&cdf, 0.125), 0.);
        assert_eq!(inverse_cdf(&cdf, 0.75), 1.);
        assert_eq!(inverse_cdf(&cdf, 1.), 2.);
    }

    #[test]
    fn test_self_match_is_identity_for_sparse_histograms() {
        let values = [3u8, 3, 40, 41, 41, 90, 250];
        assert_eq!(match_channel(&values, &values), values.to_vec());
    }

    #[test]
    fn test_reference_size_is_irrelevant() {
        let source = [0u8, 100, 200, 255];
        let small = [5u8, 60];
        let large: Vec<u8> = small.iter().flat_map(|&v| std::iter::repeat(v).take(50)).collect();
        assert_eq!(match_channel(&source, &small), match_channel(&source, &large));
    }

    #[test]
    fn test_match_rgb_per_channel() {
        let source = Image::new(2, 1, vec![0, 10, 20, 255, 30, 40]).unwrap();
        let reference = Image::new(2, 1, vec![100, 0, 7, 200, 1, 9]).unwrap();
        let out = match_rgb(&source, &reference);
        assert_eq!(out.as_slice(), &[100, 0, 7, 200, 1, 9]);
    }

    #[test]
    fn test_lab_lightness_is_binned_by_truncation() {
        // gray 128 sits at L' 136.64, binned as 136 it decodes to 127.36
        let gray = Image::filled(2, 2, Rgb::new(128, 128, 128)).unwrap();
        let out = match_lab_l(&gray, &gray, &CieLab);
        assert_eq!(out, Image::filled(2, 2, Rgb::new(127, 127, 127)).unwrap());
    }

    #[test]
    fn test_match_lab_l_of_gray_towards_brighter_gray() {
        let source = Image::filled(4, 4, Rgb::new(60, 60, 60)).unwrap();
        let reference = Image::filled(2, 2, Rgb::new(180, 180, 180)).unwrap();
        let out = match_lab_l(&source, &reference, &CieLab);
        for px in out.pixels() {
            assert!((px.r as i32 - 180).abs() <= 2, "{:?}", px);
            assert!((px.r as i32 - px.g as i32).abs() <= 1);
            assert!((px.g as i32 - px.b as i32).abs() <= 1);
        }
    }
}
