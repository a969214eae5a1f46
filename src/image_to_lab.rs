/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::MatchError;
use crate::gamma_curves::srgb_to_linear;
use crate::image::{check_strided, CHANNELS};
use crate::lab::Lab;
use crate::rgb::Rgb;
use crate::xyz::Xyz;
use crate::xyz_transform::SRGB_TO_XYZ_D65;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Converts validated rows, strides are in elements.
///
/// With `USE_LUT` the gamma decode is read from a 256 entry table built with
/// the very same curve, so both paths produce identical samples.
#[inline(always)]
pub(crate) fn channels_to_lab<const USE_LUT: bool>(
    src: &[u8],
    src_stride: usize,
    dst: &mut [f32],
    dst_stride: usize,
    width: u32,
    height: u32,
) {
    let mut lut_table = [0f64; 256];
    if USE_LUT {
        for (i, element) in lut_table.iter_mut().enumerate() {
            *element = srgb_to_linear(i as f64 * (1f64 / 255f64));
        }
    }

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
            let lab = if USE_LUT {
                let linear = Rgb::new(
                    lut_table[src_px[0] as usize],
                    lut_table[src_px[1] as usize],
                    lut_table[src_px[2] as usize],
                );
                Lab::from_xyz(Xyz::from_linear_rgb(linear, &SRGB_TO_XYZ_D65))
            } else {
                Lab::from_rgb(Rgb::from_slice(src_px))
            };
            let stored = lab.to_storage();
            dst_px[0] = stored[0] as f32;
            dst_px[1] = stored[1] as f32;
            dst_px[2] = stored[2] as f32;
        }
    });
}

/// This function converts sRGB to CIE Lab against D65 white point.
///
/// Output is written in the 8-bit compatible layout: `L * 255 / 100`, `a + 128`, `b + 128`.
///
/// # Arguments
/// * `src` - A slice contains RGB data
/// * `src_stride` - Bytes per row for src data.
/// * `dst` - A mutable slice to receive LAB data
/// * `dst_stride` - Bytes per row for dst data
/// * `width` - Image width
/// * `height` - Image height
pub fn rgb_to_lab(
    src: &[u8],
    src_stride: u32,
    dst: &mut [f32],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), MatchError> {
    let src_stride = check_strided(src.len(), src_stride, width, height, 1)?;
    let dst_stride = check_strided(
        dst.len(),
        dst_stride,
        width,
        height,
        std::mem::size_of::<f32>(),
    )?;
    channels_to_lab::<false>(src, src_stride, dst, dst_stride, width, height);
    Ok(())
}
