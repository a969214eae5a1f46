/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::affine::ChannelMap;
use crate::channels::{match_lightness, match_planes};
use crate::converter::ColorConverter;
use crate::image::Image;
use crate::rgb::quantize;
use crate::statistics::mean_std;
use num_traits::AsPrimitive;

/// Mean and deviation transfer, `None` when the source channel is constant.
pub fn channel_map<T: AsPrimitive<f64>>(source: &[T], reference: &[T]) -> Option<ChannelMap> {
    let (source_mean, source_std) = mean_std(source);
    if source_std == 0f64 {
        tracing::trace!("constant source channel, passing it through");
        return None;
    }
    let (reference_mean, reference_std) = mean_std(reference);
    Some(ChannelMap {
        scale: reference_std / source_std,
        source_mean,
        reference_mean,
    })
}

/// Reinhard matching of a single 8-bit channel
pub fn match_channel(source: &[u8], reference: &[u8]) -> Vec<u8> {
    match channel_map(source, reference) {
        Some(map) => source.iter().map(|&v| quantize(map.map(v as f64))).collect(),
        None => source.to_vec(),
    }
}

/// Reinhard matching of a floating point channel, clipped to `0..=255` but not quantized
pub fn match_channel_f32(source: &[f32], reference: &[f32]) -> Vec<f32> {
    match channel_map(source, reference) {
        Some(map) => source
            .iter()
            .map(|&v| map.map(v as f64).clamp(0f64, 255f64) as f32)
            .collect(),
        None => source.to_vec(),
    }
}

/// Reinhard matching of R, G and B independently
pub fn match_rgb(source: &Image, reference: &Image) -> Image {
    match_planes(source, reference, match_channel)
}

/// Reinhard matching of the Lab lightness only
pub fn match_lab_l(source: &Image, reference: &Image, converter: &dyn ColorConverter) -> Image {
    match_lightness(source, reference, converter, match_channel_f32)
}
