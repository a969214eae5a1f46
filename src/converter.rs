/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::image::{Image, LabImage, CHANNELS};
use crate::image_to_lab::channels_to_lab;
use crate::lab_to_image::lab_to_channels;

/// Bidirectional sRGB <-> Lab conversion used by the Lab matching mode.
///
/// Every implementation must agree with [CieLab], the canonical formulas,
/// within 8-bit quantization.
pub trait ColorConverter: Send + Sync {
    fn to_lab(&self, image: &Image) -> LabImage;

    fn to_rgb(&self, lab: &LabImage) -> Image;
}

/// Canonical per-pixel CIE Lab conversion, D65 white point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CieLab;

/// Same conversion as [CieLab] with the sRGB decode served from a lookup table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CieLabLut;

#[inline]
fn convert_to_lab<const USE_LUT: bool>(image: &Image) -> LabImage {
    let mut dst = vec![0f32; image.pixel_count() * CHANNELS];
    let row = image.width() as usize * CHANNELS;
    channels_to_lab::<USE_LUT>(
        image.as_slice(),
        row,
        &mut dst,
        row,
        image.width(),
        image.height(),
    );
    LabImage::from_vec_unchecked(image.width(), image.height(), dst)
}

#[inline]
fn convert_to_rgb(lab: &LabImage) -> Image {
    let mut dst = vec![0u8; lab.as_slice().len()];
    let row = lab.width() as usize * CHANNELS;
    lab_to_channels(lab.as_slice(), row, &mut dst, row, lab.width(), lab.height());
    Image::from_vec_unchecked(lab.width(), lab.height(), dst)
}

impl ColorConverter for CieLab {
    fn to_lab(&self, image: &Image) -> LabImage {
        convert_to_lab::<false>(image)
    }

    fn to_rgb(&self, lab: &LabImage) -> Image {
        convert_to_rgb(lab)
    }
}

impl ColorConverter for CieLabLut {
    fn to_lab(&self, image: &Image) -> LabImage {
        convert_to_lab::<true>(image)
    }

    fn to_rgb(&self, lab: &LabImage) -> Image {
        convert_to_rgb(lab)
    }
}
