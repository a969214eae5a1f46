/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::MatchError;
use crate::image::{check_strided, CHANNELS};
use crate::lab::Lab;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[inline(always)]
pub(crate) fn lab_to_channels(
    src: &[f32],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: u32,
    height: u32,
) {
    let row = width as usize * CHANNELS;

    let iter;

    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_mut(dst_stride)
            .zip(src.par_chunks(src_stride))
            .take(height as usize);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_mut(dst_stride)
            .zip(src.chunks(src_stride))
            .take(height as usize);
    }

    iter.for_each(|(dst, src)| {
        for (dst_px, src_px) in dst[..row]
            .chunks_exact_mut(CHANNELS)
            .zip(src[..row].chunks_exact(CHANNELS))
        {
            let lab = Lab::from_storage([src_px[0] as f64, src_px[1] as f64, src_px[2] as f64]);
            let rgb = lab.to_rgb();
            dst_px[0] = rgb.r;
            dst_px[1] = rgb.g;
            dst_px[2] = rgb.b;
        }
    });
}

/// This function converts CIE Lab against D65 white point back into 8-bit sRGB.
///
/// Input is expected in the 8-bit compatible layout produced by [crate::rgb_to_lab],
/// out of gamut colors are clipped.
///
/// # Arguments
/// * `src` - A slice contains LAB data
/// * `src_stride` - Bytes per row for src data.
/// * `dst` - A mutable slice to receive RGB data
/// * `dst_stride` - Bytes per row for dst data
/// * `width` - Image width
/// * `height` - Image height
pub fn lab_to_rgb(
    src: &[f32],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), MatchError> {
    let src_stride = check_strided(
        src.len(),
        src_stride,
        width,
        height,
        std::mem::size_of::<f32>(),
    )?;
    let dst_stride = check_strided(dst.len(), dst_stride, width, height, 1)?;
    lab_to_channels(src, src_stride, dst, dst_stride, width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb_to_lab;

    #[test]
    fn test_round_trip_every_gray() {
        let src: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v]).collect();
        let mut lab = vec![0f32; src.len()];
        let mut back = vec![0u8; src.len()];
        rgb_to_lab(&src, 768, &mut lab, 768 * 4, 256, 1).unwrap();
        lab_to_rgb(&lab, 768 * 4, &mut back, 768, 256, 1).unwrap();
        for (a, b) in src.iter().zip(back.iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1, "{a} != {b}");
        }
    }

    #[test]
    fn test_out_of_gamut_is_clipped() {
        // L = 100 with extreme chroma
        let lab = [255f32, 255., 0.];
        let mut rgb = [0u8; 3];
        lab_to_rgb(&lab, 12, &mut rgb, 3, 1, 1).unwrap();
        assert_eq!(rgb[0], 255);
    }
}
