/* ************************************************************************ **
** This file is part of stridemat, and is licensed under EITHER the MIT     **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The matrix type and its addressing model.
//!
//! A `Mat` either owns a dense row-major buffer, or is a view into a
//! rectangular region of another matrix's buffer. Both cases are addressed
//! through the same `(row, col) -> row * width + col` arithmetic, where
//! `width` is the per-row stride of the backing buffer.

use crate::MatError;

use std::ops::{Index, IndexMut};

use num_traits::Zero;

/// A 2-D matrix over owned or borrowed storage.
///
/// The lifetime parameter is only meaningful for views; owned matrices
/// can always be typed as `Mat<'static>`.
#[derive(Debug)]
pub struct Mat<'a, T = f64> {
    // invariants:
    //   width >= cols
    //   buffer length >= rows * width  (for rows > 0; an empty matrix
    //                                   may have an empty buffer)
    rows: usize,
    cols: usize,
    width: usize,
    data: Data<'a, T>,
}

#[derive(Debug)]
enum Data<'a, T> {
    /// Exclusively owned storage. Only this variant may be reshaped
    /// or reallocated.
    Main(Vec<T>),
    /// Storage borrowed from another matrix's buffer. Never freed or
    /// reallocated through the view; `width` is the owner's row stride.
    View(&'a mut [T]),
}

impl<T> Mat<'static, T> {
    /// Construct an owning matrix from row-major data.
    ///
    /// # Panics
    ///
    /// Panics if the data length does not equal `rows * cols`.
    pub fn from_row_major_data((rows, cols): (usize, usize), data: Vec<T>) -> Self {
        assert_eq!(data.len(), rows * cols);
        Mat { rows, cols, width: cols, data: Data::Main(data) }
    }

    /// An owning matrix with every element equal to `fill`.
    pub fn new_filled((rows, cols): (usize, usize), fill: &T) -> Self
    where T: Clone,
    {
        let data = (0..rows * cols).map(|_| fill.clone()).collect();
        Mat { rows, cols, width: cols, data: Data::Main(data) }
    }

    /// An owning matrix of zeros.
    pub fn zeros((rows, cols): (usize, usize)) -> Self
    where T: Zero + Clone,
    { Mat::new_filled((rows, cols), &T::zero()) }

    /// The matrix with no elements.
    ///
    /// This is the only zero-extent matrix the crate produces, and it is
    /// what operations report `EmptyArgument` for.
    pub fn empty() -> Self
    { Mat { rows: 0, cols: 0, width: 0, data: Data::Main(vec![]) } }
}

impl<'a, T> Mat<'a, T> {
    pub fn num_rows(&self) -> usize { self.rows }
    pub fn num_cols(&self) -> usize { self.cols }

    pub fn dims(&self) -> (usize, usize) { (self.rows, self.cols) }

    /// Number of stored elements per row of the backing buffer.
    ///
    /// Equals `num_cols` for a contiguous owning matrix, and the parent's
    /// width for a view.
    pub fn width(&self) -> usize { self.width }

    pub fn is_empty(&self) -> bool { self.rows == 0 || self.cols == 0 }

    /// Whether this matrix owns its storage.
    pub fn is_main(&self) -> bool
    { match self.data { Data::Main(_) => true, Data::View(_) => false } }

    /// Whether `buffer[r * cols + c]` is a valid address for every element.
    ///
    /// True only for owning matrices whose rows are packed edge to edge.
    /// Operations test this once per call to choose between direct buffer
    /// indexing and stride arithmetic.
    pub fn is_contiguous(&self) -> bool
    { self.is_main() && self.width == self.cols }

    /// The backing storage as a flat slice.
    ///
    /// Row-major order is only meaningful when `is_contiguous()`; for a
    /// view this is the borrowed region, which includes the stride gaps.
    pub fn row_major_data(&self) -> &[T]
    { self.buf() }

    pub fn row_major_data_mut(&mut self) -> &mut [T]
    { self.buf_mut() }

    fn buf(&self) -> &[T] {
        match self.data {
            Data::Main(ref v) => v,
            Data::View(ref s) => s,
        }
    }

    fn buf_mut(&mut self) -> &mut [T] {
        match self.data {
            Data::Main(ref mut v) => v,
            Data::View(ref mut s) => s,
        }
    }

    /// Address an element. Valid for both owning matrices and views.
    #[inline(always)] // inlining tends to eliminate the bounds check
    pub fn at(&self, r: usize, c: usize) -> &T {
        debug_assert!(r < self.rows && c < self.cols);
        &self.buf()[r * self.width + c]
    }

    #[inline(always)]
    pub fn at_mut(&mut self, r: usize, c: usize) -> &mut T {
        debug_assert!(r < self.rows && c < self.cols);
        let width = self.width;
        &mut self.buf_mut()[r * width + c]
    }

    /// Borrow a rectangular sub-block as a view.
    ///
    /// The view addresses the parent's buffer with the parent's width as
    /// its stride, so it is never contiguous-indexable unless it spans
    /// whole rows of a contiguous parent (and even then it makes no such
    /// claim; views always take the generic path).
    ///
    /// # Panics
    ///
    /// Panics if the requested block has a zero extent or reaches past
    /// the edge of `self`.
    pub fn slice(&mut self, (r0, c0): (usize, usize), (rows, cols): (usize, usize)) -> Mat<'_, T> {
        assert!(rows >= 1 && cols >= 1, "zero-extent view");
        assert!(r0 + rows <= self.rows && c0 + cols <= self.cols,
                "view of {}x{} at ({},{}) exceeds {}x{} matrix",
                rows, cols, r0, c0, self.rows, self.cols);

        let width = self.width;
        let start = r0 * width + c0;
        let end = start + (rows - 1) * width + cols;
        let slice = &mut self.buf_mut()[start..end];
        Mat { rows, cols, width, data: Data::View(slice) }
    }

    /// Borrow a single row as a `1 x cols` view.
    pub fn row_view(&mut self, r: usize) -> Mat<'_, T>
    { let cols = self.cols; self.slice((r, 0), (1, cols)) }

    /// Borrow a single column as a `rows x 1` view.
    pub fn col_view(&mut self, c: usize) -> Mat<'_, T>
    { let rows = self.rows; self.slice((0, c), (rows, 1)) }

    /// Copy into a freshly-allocated contiguous owning matrix.
    pub fn to_owned_mat(&self) -> Mat<'static, T>
    where T: Clone,
    {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for r in 0..self.rows {
            for c in 0..self.cols {
                data.push(self.at(r, c).clone());
            }
        }
        Mat::from_row_major_data((self.rows, self.cols), data)
    }

    /// Make `self` an owning 3x1 column vector, reusing storage when the
    /// existing buffer already has room for 3 elements.
    ///
    /// This is the one place in the crate where a matrix's shape and
    /// storage are replaced in place, and it refuses to touch borrowed
    /// storage. On allocation failure the matrix is left unmodified; the
    /// old buffer is not released until the new one exists.
    pub fn reserve_as_col3(&mut self) -> Result<(), MatError>
    where T: Zero,
    {
        match self.data {
            Data::View(_) => Err(MatError::NotOwningMatrix),
            Data::Main(ref mut buf) => {
                if self.rows * self.cols < 3 {
                    trace!("reshape: allocating a fresh 3x1 buffer");
                    let mut fresh = Vec::new();
                    fresh.try_reserve_exact(3).map_err(|_| MatError::OutOfMemory)?;
                    fresh.extend((0..3).map(|_| T::zero()));
                    *buf = fresh;
                } else {
                    trace!("reshape: reusing {} slots as 3x1", self.rows * self.cols);
                }
                self.rows = 3;
                self.cols = 1;
                self.width = 1;
                Ok(())
            },
        }
    }
}

impl<'a, T> Index<(usize, usize)> for Mat<'a, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &T
    { self.at(r, c) }
}

impl<'a, T> IndexMut<(usize, usize)> for Mat<'a, T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T
    { self.at_mut(r, c) }
}
