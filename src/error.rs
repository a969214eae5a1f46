/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use thiserror::Error;

/// Errors raised by structurally invalid requests.
///
/// Numeric degeneracies (zero variance, singular covariance) are absorbed by
/// the matchers and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("unknown method `{0}`, expected one of: hm, reinhard, mvgd, mkl, hm-mvgd-hm, hm-mkl-hm")]
    UnknownMethod(String),

    #[error("unknown mode `{0}`, expected one of: rgb, lab")]
    UnknownMode(String),

    #[error("image of {width}x{height} pixels cannot be backed by {len} samples, expected width * height * 3 and a non-empty image")]
    InvalidImageShape { width: u32, height: u32, len: usize },

    #[error("row stride of {stride} bytes is too small or misaligned for {width} pixels")]
    InvalidStride { stride: u32, width: u32 },
}
