/* ************************************************************************ **
** This file is part of stridemat, and is licensed under EITHER the MIT     **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Vector-specific operations.
//!
//! A matrix counts as a vector when exactly one of its extents is 1;
//! a single column is addressed along its rows, a single row along its
//! columns. Every function here behaves identically for owning matrices
//! and for strided views of another matrix's storage.

use crate::{Mat, MatError};

/// Vector length of a matrix.
///
/// Returns `rows` for a single column, `cols` for a single row, and 0
/// for anything else (including the empty matrix). 0 is a sentinel for
/// "not applicable", not an error; the crate never produces a
/// zero-length vector, so callers can tell the cases apart.
pub fn len<T>(m: &Mat<'_, T>) -> usize {
    if m.num_cols() == 1 {
        m.num_rows()
    } else if m.num_rows() == 1 {
        m.num_cols()
    } else {
        0
    }
}

/// Read element `k` of a vector.
pub fn get<T: Copy>(m: &Mat<'_, T>, k: usize) -> Result<T, MatError> {
    if m.is_empty() {
        return Err(MatError::EmptyArgument);
    }
    if m.num_cols() == 1 {
        // column vector
        if k < m.num_rows() {
            Ok(*m.at(k, 0))
        } else {
            Err(MatError::IndexOutOfRange)
        }
    } else if m.num_rows() == 1 {
        // row vector
        if k < m.num_cols() {
            Ok(*m.at(0, k))
        } else {
            Err(MatError::IndexOutOfRange)
        }
    } else {
        Err(MatError::NotAVector)
    }
}

/// Write element `k` of a vector.
pub fn set<T>(m: &mut Mat<'_, T>, k: usize, v: T) -> Result<(), MatError> {
    if m.is_empty() {
        return Err(MatError::EmptyArgument);
    }
    if m.num_cols() == 1 {
        if k < m.num_rows() {
            *m.at_mut(k, 0) = v;
            Ok(())
        } else {
            Err(MatError::IndexOutOfRange)
        }
    } else if m.num_rows() == 1 {
        if k < m.num_cols() {
            *m.at_mut(0, k) = v;
            Ok(())
        } else {
            Err(MatError::IndexOutOfRange)
        }
    } else {
        Err(MatError::NotAVector)
    }
}

/// Inner product of two vectors.
pub fn dot(a: &Mat<'_, f64>, b: &Mat<'_, f64>) -> Result<f64, MatError> {
    let n = len(a);
    if n == 0 || len(b) == 0 {
        return Err(MatError::NotAVector);
    }
    if n != len(b) {
        return Err(MatError::IncompatibleShapes);
    }

    // The contiguity test is hoisted out of the loop, and both loops
    // accumulate left to right; the two paths must produce bitwise
    // identical sums for the same element sequence.
    let mut sum = 0.0;
    if a.is_contiguous() && b.is_contiguous() {
        let xs = a.row_major_data();
        let ys = b.row_major_data();
        for i in 0..n {
            sum += xs[i] * ys[i];
        }
    } else {
        for i in 0..n {
            sum += get(a, i)? * get(b, i)?;
        }
    }
    Ok(sum)
}

/// Cross product of two 3-vectors, written into `dest`.
///
/// `dest` is reshaped to an owning 3x1 column when its vector length is
/// not already 3; see [`Mat::reserve_as_col3`] for the sizing policy. A
/// `dest` that is a borrowed view but already has length 3 is written
/// through as-is: ownership is only checked when a reshape is actually
/// required.
pub fn cross(dest: &mut Mat<'_, f64>, a: &Mat<'_, f64>, b: &Mat<'_, f64>) -> Result<(), MatError> {
    if dest.is_empty() || a.is_empty() || b.is_empty() {
        return Err(MatError::EmptyArgument);
    }
    if len(a) != 3 || len(b) != 3 {
        return Err(MatError::UndefinedForShape);
    }
    if len(dest) != 3 {
        dest.reserve_as_col3()?;
    }

    let (a0, a1, a2) = (get(a, 0)?, get(a, 1)?, get(a, 2)?);
    let (b0, b1, b2) = (get(b, 0)?, get(b, 1)?, get(b, 2)?);
    set(dest, 0, a1 * b2 - b1 * a2)?;
    set(dest, 1, a2 * b0 - a0 * b2)?;
    set(dest, 2, a0 * b1 - b0 * a1)?;
    Ok(())
}

/// Squared Euclidean norm of a vector.
pub fn sqnorm(m: &Mat<'_, f64>) -> Result<f64, MatError> {
    if m.is_empty() {
        return Err(MatError::EmptyArgument);
    }
    let mut sum = 0.0;
    if m.num_cols() == 1 {
        for i in 0..m.num_rows() {
            let v = *m.at(i, 0);
            sum += v * v;
        }
    } else if m.num_rows() == 1 {
        for k in 0..m.num_cols() {
            let v = *m.at(0, k);
            sum += v * v;
        }
    } else {
        return Err(MatError::NotAVector);
    }
    Ok(sum)
}

/// Scale a vector in place to unit norm.
///
/// A zero vector is left untouched and the call still succeeds; skipping
/// the division pass is the documented guard against dividing by zero.
pub fn normalize(m: &mut Mat<'_, f64>) -> Result<(), MatError> {
    let sum = sqnorm(m)?;
    if sum > 0.0 {
        let norm = sum.sqrt();
        if m.num_cols() == 1 {
            for i in 0..m.num_rows() {
                *m.at_mut(i, 0) /= norm;
            }
        } else {
            for k in 0..m.num_cols() {
                *m.at_mut(0, k) /= norm;
            }
        }
    }
    Ok(())
}
