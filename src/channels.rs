/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::converter::ColorConverter;
use crate::image::{Image, CHANNELS};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Runs a single channel matcher on R, G and B independently.
pub(crate) fn match_planes<F>(source: &Image, reference: &Image, matcher: F) -> Image
where
    F: Fn(&[u8], &[u8]) -> Vec<u8> + Sync,
{
    let mut planes: [Vec<u8>; CHANNELS] = Default::default();

    #[cfg(feature = "rayon")]
    let iter = planes.par_iter_mut().enumerate();
    #[cfg(not(feature = "rayon"))]
    let iter = planes.iter_mut().enumerate();

    iter.for_each(|(channel, plane)| {
        *plane = matcher(&source.channel(channel), &reference.channel(channel));
    });

    Image::from_planes(source.width(), source.height(), planes)
}

/// Converts both images to Lab, rewrites the source lightness and converts back.
///
/// `a` and `b` of the source are carried through untouched.
pub(crate) fn match_lightness<F>(
    source: &Image,
    reference: &Image,
    converter: &dyn ColorConverter,
    matcher: F,
) -> Image
where
    F: FnOnce(&[f32], &[f32]) -> Vec<f32>,
{
    let source_lab = converter.to_lab(source);
    let reference_lab = converter.to_lab(reference);
    let lightness = matcher(&source_lab.channel(0), &reference_lab.channel(0));
    converter.to_rgb(&source_lab.with_channel(0, &lightness))
}
