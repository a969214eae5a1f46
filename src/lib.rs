/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Transfers the color statistics of a reference image onto a source image.
//!
//! Available methods are histogram (CDF) matching, Reinhard mean/deviation
//! matching, multivariate Gaussian whitening-recoloring (MVGD) and the
//! Monge-Kantorovich linear optimal transport map (MKL), plus the
//! `hm-mvgd-hm` and `hm-mkl-hm` chains. Each runs either on RGB or on the CIE
//! Lab lightness only.
//!
//! ```
//! use colormatch::{match_by_name, Image, Rgb};
//!
//! let source = Image::filled(8, 8, Rgb::new(40, 80, 120)).unwrap();
//! let reference = Image::filled(4, 4, Rgb::new(220, 120, 40)).unwrap();
//! let matched = match_by_name(&source, &reference, "mkl", "rgb").unwrap();
//! assert_eq!(matched.pixel(0, 0), Some(Rgb::new(220, 120, 40)));
//! ```
mod affine;
mod channels;
mod color_match;
mod converter;
mod error;
mod gamma_curves;
pub mod histogram;
mod image;
mod image_to_lab;
mod lab;
mod lab_to_image;
mod method;
pub mod mkl;
pub mod mvgd;
pub mod reinhard;
mod rgb;
mod spd;
mod statistics;
mod xyz;
mod xyz_transform;

pub use affine::{AffineTransform, ChannelMap};
pub use color_match::{match_by_name, match_image, ColorMatch};
pub use converter::{CieLab, CieLabLut, ColorConverter};
pub use error::MatchError;
pub use gamma_curves::*;
pub use image::{Image, LabImage};
pub use image_to_lab::rgb_to_lab;
pub use lab::Lab;
pub use lab_to_image::lab_to_rgb;
pub use method::{Matcher, Method, Mode};
pub use rgb::{quantize, Rgb};
pub use spd::{mat_sqrt, sqrt_and_inv_sqrt, COVARIANCE_EPSILON};
pub use statistics::{mean_std, PixelStatistics};
pub use xyz::Xyz;
pub use xyz_transform::*;
