/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::converter::ColorConverter;
use crate::error::MatchError;
use crate::image::Image;
use crate::{histogram, mkl, mvgd, reinhard};
use std::fmt;
use std::str::FromStr;

/// Color space the statistics are matched in
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Mode {
    /// All three RGB channels
    #[default]
    Rgb,
    /// CIE Lab lightness only, chroma of the source is kept
    Lab,
}

/// A single matching algorithm
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Matcher {
    /// Per channel CDF matching
    Histogram,
    /// Per channel mean and deviation matching
    Reinhard,
    /// Multivariate Gaussian whitening and recoloring
    Mvgd,
    /// Monge-Kantorovich linear optimal transport
    Mkl,
}

impl Matcher {
    pub fn apply(
        &self,
        source: &Image,
        reference: &Image,
        mode: Mode,
        converter: &dyn ColorConverter,
    ) -> Image {
        match (self, mode) {
            (Matcher::Histogram, Mode::Rgb) => histogram::match_rgb(source, reference),
            (Matcher::Histogram, Mode::Lab) => {
                histogram::match_lab_l(source, reference, converter)
            }
            (Matcher::Reinhard, Mode::Rgb) => reinhard::match_rgb(source, reference),
            (Matcher::Reinhard, Mode::Lab) => reinhard::match_lab_l(source, reference, converter),
            (Matcher::Mvgd, Mode::Rgb) => mvgd::match_rgb(source, reference),
            (Matcher::Mvgd, Mode::Lab) => mvgd::match_lab_l(source, reference, converter),
            (Matcher::Mkl, Mode::Rgb) => mkl::match_rgb(source, reference),
            (Matcher::Mkl, Mode::Lab) => mkl::match_lab_l(source, reference, converter),
        }
    }
}

/// Matching method, either a single [Matcher] or an ordered chain of them
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Method {
    Hm,
    Reinhard,
    Mvgd,
    #[default]
    Mkl,
    HmMvgdHm,
    HmMklHm,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::Hm,
        Method::Reinhard,
        Method::Mvgd,
        Method::Mkl,
        Method::HmMvgdHm,
        Method::HmMklHm,
    ];

    /// Stages applied in order, each against the original reference
    pub fn stages(&self) -> &'static [Matcher] {
        match self {
            Method::Hm => &[Matcher::Histogram],
            Method::Reinhard => &[Matcher::Reinhard],
            Method::Mvgd => &[Matcher::Mvgd],
            Method::Mkl => &[Matcher::Mkl],
            Method::HmMvgdHm => &[Matcher::Histogram, Matcher::Mvgd, Matcher::Histogram],
            Method::HmMklHm => &[Matcher::Histogram, Matcher::Mkl, Matcher::Histogram],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Hm => "hm",
            Method::Reinhard => "reinhard",
            Method::Mvgd => "mvgd",
            Method::Mkl => "mkl",
            Method::HmMvgdHm => "hm-mvgd-hm",
            Method::HmMklHm => "hm-mkl-hm",
        }
    }
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Rgb, Mode::Lab];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Rgb => "rgb",
            Mode::Lab => "lab",
        }
    }
}

impl FromStr for Method {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| MatchError::UnknownMethod(s.to_string()))
    }
}

impl FromStr for Mode {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| MatchError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
