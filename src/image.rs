/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::converter::{CieLab, ColorConverter};
use crate::error::MatchError;
use crate::rgb::Rgb;

/// Interleaved samples per pixel
pub const CHANNELS: usize = 3;

/// Checks that a strided buffer of `len` elements of `element_size` bytes
/// holds `height` rows of `width` interleaved pixels.
///
/// Returns the row stride in elements.
pub(crate) fn check_strided(
    len: usize,
    stride: u32,
    width: u32,
    height: u32,
    element_size: usize,
) -> Result<usize, MatchError> {
    let row = width as usize * CHANNELS;
    if stride as usize % element_size != 0 || (stride as usize / element_size) < row {
        return Err(MatchError::InvalidStride { stride, width });
    }
    let stride_elements = stride as usize / element_size;
    if width == 0 || height == 0 || len < stride_elements * (height as usize - 1) + row {
        return Err(MatchError::InvalidImageShape { width, height, len });
    }
    Ok(stride_elements)
}

fn check_packed(len: usize, width: u32, height: u32) -> Result<(), MatchError> {
    if width == 0 || height == 0 || len != width as usize * height as usize * CHANNELS {
        return Err(MatchError::InvalidImageShape { width, height, len });
    }
    Ok(())
}

fn copy_strided<T: Copy>(src: &[T], stride_elements: usize, width: u32, height: u32) -> Vec<T> {
    let row = width as usize * CHANNELS;
    let mut data = Vec::with_capacity(row * height as usize);
    for y in 0..height as usize {
        let start = y * stride_elements;
        data.extend_from_slice(&src[start..start + row]);
    }
    data
}

fn extract_channel<T: Copy>(data: &[T], channel: usize) -> Vec<T> {
    data.chunks_exact(CHANNELS).map(|px| px[channel]).collect()
}

/// An 8-bit RGB image, `height` rows of `width` interleaved R, G, B samples without padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Image {
    /// Wraps packed RGB samples.
    ///
    /// Fails with [MatchError::InvalidImageShape] unless `data` holds exactly
    /// `width * height * 3` samples of a non-empty image.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, MatchError> {
        check_packed(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Copies RGB rows out of a buffer whose rows are `stride` bytes apart.
    pub fn from_raw_parts(
        src: &[u8],
        stride: u32,
        width: u32,
        height: u32,
    ) -> Result<Self, MatchError> {
        let stride_elements = check_strided(src.len(), stride, width, height, 1)?;
        Ok(Self {
            data: copy_strided(src, stride_elements, width, height),
            width,
            height,
        })
    }

    /// Builds an image out of row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb<u8>]) -> Result<Self, MatchError> {
        let data = pixels.iter().flat_map(|px| [px.r, px.g, px.b]).collect();
        Self::new(width, height, data)
    }

    /// A single color image.
    pub fn filled(width: u32, height: u32, color: Rgb<u8>) -> Result<Self, MatchError> {
        let count = width as usize * height as usize;
        Self::from_pixels(width, height, &vec![color; count])
    }

    /// Shape is known to be valid by construction.
    pub(crate) fn from_vec_unchecked(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self {
            data,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at column `x` and row `y`, `None` outside of the image
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let px = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some(Rgb::from_slice(&self.data[px..px + CHANNELS]))
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgb<u8>> + '_ {
        self.data.chunks_exact(CHANNELS).map(Rgb::from_slice)
    }

    /// Samples of one channel, `0` red, `1` green, `2` blue
    pub fn channel(&self, channel: usize) -> Vec<u8> {
        extract_channel(&self.data, channel)
    }

    /// Reassembles an image from three planes of `width * height` samples.
    pub(crate) fn from_planes(width: u32, height: u32, planes: [Vec<u8>; CHANNELS]) -> Self {
        let mut data = Vec::with_capacity(planes[0].len() * CHANNELS);
        for ((r, g), b) in planes[0].iter().zip(planes[1].iter()).zip(planes[2].iter()) {
            data.extend_from_slice(&[*r, *g, *b]);
        }
        Self::from_vec_unchecked(width, height, data)
    }

    /// Converts into Lab with the canonical converter
    pub fn to_lab(&self) -> LabImage {
        CieLab.to_lab(self)
    }
}

/// Lab image in the 8-bit compatible layout: `L` rescaled to `0..=255`,
/// `a` and `b` offset by 128.
#[derive(Clone, Debug, PartialEq)]
pub struct LabImage {
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl LabImage {
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self, MatchError> {
        check_packed(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub(crate) fn from_vec_unchecked(width: u32, height: u32, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self {
            data,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Samples of one channel, `0` lightness, `1` a, `2` b
    pub fn channel(&self, channel: usize) -> Vec<f32> {
        extract_channel(&self.data, channel)
    }

    /// Copy of `self` with one channel replaced
    pub fn with_channel(&self, channel: usize, values: &[f32]) -> LabImage {
        let mut data = self.data.clone();
        for (px, &v) in data.chunks_exact_mut(CHANNELS).zip(values.iter()) {
            px[channel] = v;
        }
        Self::from_vec_unchecked(self.width, self.height, data)
    }

    /// Converts back into 8-bit RGB with the canonical converter
    pub fn to_rgb(&self) -> Image {
        CieLab.to_rgb(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rejects_wrong_sample_count() {
        assert_eq!(
            Image::new(2, 2, vec![0; 11]),
            Err(MatchError::InvalidImageShape {
                width: 2,
                height: 2,
                len: 11
            })
        );
        assert!(Image::new(0, 4, vec![]).is_err());
        assert!(Image::new(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn test_from_raw_parts_drops_padding() {
        // 2x2 image with two bytes of padding per row
        let src = [1, 2, 3, 4, 5, 6, 0, 0, 7, 8, 9, 10, 11, 12, 0, 0];
        let image = Image::from_raw_parts(&src, 8, 2, 2).unwrap();
        assert_eq!(image.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(image.pixel(1, 1), Some(Rgb::new(10, 11, 12)));
        assert_eq!(image.pixel(2, 1), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn test_from_raw_parts_rejects_short_stride() {
        let src = [0u8; 32];
        assert_eq!(
            Image::from_raw_parts(&src, 5, 2, 2),
            Err(MatchError::InvalidStride {
                stride: 5,
                width: 2
            })
        );
    }

    #[test]
    fn test_channel_round_trip() {
        let image = Image::new(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(image.channel(1), vec![2, 5]);
        let planes = [image.channel(0), image.channel(1), image.channel(2)];
        assert_eq!(Image::from_planes(2, 1, planes), image);
    }

    #[test]
    fn test_with_channel_leaves_source_untouched() {
        let lab = LabImage::new(1, 2, vec![10., 128., 128., 20., 100., 150.]).unwrap();
        let replaced = lab.with_channel(0, &[1., 2.]);
        assert_eq!(replaced.as_slice(), &[1., 128., 128., 2., 100., 150.]);
        assert_eq!(lab.channel(0), vec![10., 20.]);
    }
}
