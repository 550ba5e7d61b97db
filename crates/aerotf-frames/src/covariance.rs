//! Covariance algebra on flattened row-major matrices.
//!
//! A 6- or 9-dimensional state is treated as a stack of 3-D sub-blocks
//! (position, velocity, acceleration, ...) that all live in the same spatial
//! frame. Changing frame rotates every sub-block by the same 3×3 rotation `R`,
//! so the full operator is block-diagonal:
//!
//! ```text
//!           ┌ R 0 0 ┐
//! R_block = │ 0 R 0 │        Σ' = R_block · Σ · R_blockᵀ
//!           └ 0 0 R ┘
//! ```
//!
//! The product runs over the whole matrix, so cross-block terms are rotated
//! on both sides as well.

use aerotf_types::FrameError;
use nalgebra::{Matrix3, SMatrix};

/// Tile `rot` along the diagonal of an `N`×`N` operator (`N` a multiple of 3).
pub(crate) fn block_diagonal<const N: usize>(rot: &Matrix3<f64>) -> SMatrix<f64, N, N> {
    const { assert!(N % 3 == 0, "block size must be a multiple of 3") };
    let mut out = SMatrix::<f64, N, N>::zeros();
    for block in 0..N / 3 {
        out.fixed_view_mut::<3, 3>(3 * block, 3 * block).copy_from(rot);
    }
    out
}

/// Sandwich product `R_block · Σ · R_blockᵀ` on a row-major `N`×`N` covariance
/// stored in `L = N²` values.
pub(crate) fn rotate<const N: usize, const L: usize>(
    cov: &[f64; L],
    rot: &Matrix3<f64>,
) -> [f64; L] {
    const { assert!(L == N * N, "covariance length must be N²") };
    let r = block_diagonal::<N>(rot);
    let sigma = SMatrix::<f64, N, N>::from_row_slice(cov);
    to_row_major(&(r * sigma * r.transpose()))
}

fn to_row_major<const N: usize, const L: usize>(m: &SMatrix<f64, N, N>) -> [f64; L] {
    const { assert!(L == N * N) };
    let mut flat = [0.0; L];
    for row in 0..N {
        for col in 0..N {
            flat[row * N + col] = m[(row, col)];
        }
    }
    flat
}

/// Copy a caller slice into a fixed covariance array.
pub fn covariance_from_slice<const L: usize>(values: &[f64]) -> Result<[f64; L], FrameError> {
    values.try_into().map_err(|_| FrameError::DimensionMismatch {
        expected: L,
        actual: values.len(),
    })
}

/// Pack the row-major upper-right triangle (diagonal included) of an
/// `N`×`N` matrix into `U = N(N+1)/2` values.
fn covariance_to_urt<const N: usize, const L: usize, const U: usize>(cov: &[f64; L]) -> [f64; U] {
    const { assert!(L == N * N && U == N * (N + 1) / 2) };
    let mut urt = [0.0; U];
    let mut k = 0;
    for row in 0..N {
        for col in row..N {
            urt[k] = cov[row * N + col];
            k += 1;
        }
    }
    urt
}

/// Unpack an upper-right triangle into a full symmetric row-major matrix.
fn urt_to_covariance<const N: usize, const L: usize, const U: usize>(urt: &[f64; U]) -> [f64; L] {
    const { assert!(L == N * N && U == N * (N + 1) / 2) };
    let mut cov = [0.0; L];
    let mut k = 0;
    for row in 0..N {
        for col in row..N {
            cov[row * N + col] = urt[k];
            cov[col * N + row] = urt[k];
            k += 1;
        }
    }
    cov
}

/// Pack a 3×3 covariance into its 6-value upper-right triangle.
pub fn covariance3_to_urt(cov: &[f64; 9]) -> [f64; 6] {
    covariance_to_urt::<3, 9, 6>(cov)
}

/// Pack a 6×6 covariance into its 21-value upper-right triangle.
pub fn covariance6_to_urt(cov: &[f64; 36]) -> [f64; 21] {
    covariance_to_urt::<6, 36, 21>(cov)
}

/// Pack a 9×9 covariance into its 45-value upper-right triangle.
pub fn covariance9_to_urt(cov: &[f64; 81]) -> [f64; 45] {
    covariance_to_urt::<9, 81, 45>(cov)
}

/// Expand a 6-value upper-right triangle into a symmetric 3×3 covariance.
pub fn urt_to_covariance3(urt: &[f64; 6]) -> [f64; 9] {
    urt_to_covariance::<3, 9, 6>(urt)
}

/// Expand a 21-value upper-right triangle into a symmetric 6×6 covariance.
pub fn urt_to_covariance6(urt: &[f64; 21]) -> [f64; 36] {
    urt_to_covariance::<6, 36, 21>(urt)
}

/// Expand a 45-value upper-right triangle into a symmetric 9×9 covariance.
pub fn urt_to_covariance9(urt: &[f64; 45]) -> [f64; 81] {
    urt_to_covariance::<9, 81, 45>(urt)
}

/// Largest `|Σᵢⱼ − Σⱼᵢ|` of a row-major `N`×`N` matrix.
#[cfg(test)]
pub(crate) fn asymmetry<const N: usize, const L: usize>(cov: &[f64; L]) -> f64 {
    const { assert!(L == N * N) };
    let mut worst = 0.0_f64;
    for row in 0..N {
        for col in row + 1..N {
            worst = worst.max((cov[row * N + col] - cov[col * N + row]).abs());
        }
    }
    worst
}
