/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use nalgebra::{Matrix3, SymmetricEigen, Vector3};

/// Diagonal regularization and eigenvalue floor applied to covariance matrices
pub const COVARIANCE_EPSILON: f64 = 1e-6;

#[inline]
fn symmetric_eigen(a: &Matrix3<f64>) -> SymmetricEigen<f64, nalgebra::U3> {
    SymmetricEigen::new((a + a.transpose()) * 0.5f64)
}

/// Rebuilds `V * diag(values) * V^T`
#[inline]
fn recompose(eigenvectors: &Matrix3<f64>, values: &Vector3<f64>) -> Matrix3<f64> {
    eigenvectors * Matrix3::from_diagonal(values) * eigenvectors.transpose()
}

/// Square root and inverse square root of a covariance matrix.
///
/// `cov + eps * I` is eigendecomposed and its eigenvalues are floored at `eps`
/// before the square roots are taken, so the inverse is always finite.
pub fn sqrt_and_inv_sqrt(cov: &Matrix3<f64>, eps: f64) -> (Matrix3<f64>, Matrix3<f64>) {
    let regularized = cov + Matrix3::identity() * eps;
    let eigen = symmetric_eigen(&regularized);
    let sqrt_w = eigen.eigenvalues.map(|w| w.max(eps).sqrt());
    let inv_sqrt_w = sqrt_w.map(|w| 1f64 / w);
    (
        recompose(&eigen.eigenvectors, &sqrt_w),
        recompose(&eigen.eigenvectors, &inv_sqrt_w),
    )
}

/// Square root of a symmetric positive semi-definite matrix.
///
/// Negative eigenvalues coming from round-off are clamped to zero.
pub fn mat_sqrt(a: &Matrix3<f64>) -> Matrix3<f64> {
    let eigen = symmetric_eigen(a);
    let sqrt_w = eigen.eigenvalues.map(|w| w.max(0f64).sqrt());
    recompose(&eigen.eigenvectors, &sqrt_w)
}
