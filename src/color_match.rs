/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::converter::{CieLab, ColorConverter};
use crate::error::MatchError;
use crate::image::Image;
use crate::method::{Method, Mode};

/// A configured color transfer: method, mode and the Lab converter backend.
///
/// # Example
///
/// ```
/// use colormatch::{ColorMatch, Image, Method, Mode, Rgb};
///
/// let source = Image::filled(4, 4, Rgb::new(20, 40, 60)).unwrap();
/// let reference = Image::filled(2, 2, Rgb::new(200, 180, 160)).unwrap();
/// let matched = ColorMatch::new(Method::Reinhard, Mode::Rgb).run(&source, &reference);
/// assert_eq!(matched.width(), 4);
/// ```
pub struct ColorMatch<'a> {
    method: Method,
    mode: Mode,
    converter: &'a dyn ColorConverter,
}

impl Default for ColorMatch<'_> {
    fn default() -> Self {
        Self::new(Method::default(), Mode::default())
    }
}

impl<'a> ColorMatch<'a> {
    /// Uses the canonical [CieLab] converter
    pub fn new(method: Method, mode: Mode) -> Self {
        Self {
            method,
            mode,
            converter: &CieLab,
        }
    }

    pub fn with_converter(mut self, converter: &'a dyn ColorConverter) -> Self {
        self.converter = converter;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Matches `source` to the statistics of `reference`.
    ///
    /// Every stage is fed the previous stage output and the untouched reference.
    /// Each stage clips and truncates its samples to 8-bit, so the last stage
    /// output is returned as is.
    pub fn run(&self, source: &Image, reference: &Image) -> Image {
        tracing::debug!(
            method = %self.method,
            mode = %self.mode,
            width = source.width(),
            height = source.height(),
            reference_width = reference.width(),
            reference_height = reference.height(),
            "color match"
        );
        let mut matched = source.clone();
        for (index, stage) in self.method.stages().iter().enumerate() {
            tracing::debug!(stage = index, matcher = ?stage, "applying stage");
            matched = stage.apply(&matched, reference, self.mode, self.converter);
        }
        matched
    }
}

/// Matches `source` to `reference` with the canonical Lab converter.
///
/// Images need not share dimensions; the reference only contributes statistics.
pub fn match_image(
    source: &Image,
    reference: &Image,
    method: Method,
    mode: Mode,
) -> Result<Image, MatchError> {
    Ok(ColorMatch::new(method, mode).run(source, reference))
}

/// String keyed entry point, e.g. `match_by_name(&a, &b, "hm-mkl-hm", "lab")`.
///
/// Tags are validated before any pixel is touched.
pub fn match_by_name(
    source: &Image,
    reference: &Image,
    method: &str,
    mode: &str,
) -> Result<Image, MatchError> {
    let method: Method = method.parse()?;
    let mode: Mode = mode.parse()?;
    match_image(source, reference, method, mode)
}
