//! Zero-copy conversion between tensors and faer matrices.
//!
//! Tensor data and faer matrices are both column-major, so a tensor whose
//! leading axes flatten to `rows` and trailing axes to `cols` can be viewed
//! as a `rows x cols` matrix without copying. Only scalars covered by faer's
//! GEMM (`ComplexField`) qualify; the integer kernel lives in
//! [`generic`](crate::backend::generic) instead.

use faer::{MatMut, MatRef};
use faer_traits::ComplexField;

use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// View tensor data as a faer matrix of the given dimensions.
pub trait AsFaerMat<T> {
    /// Immutable `rows x cols` view.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` differs from the tensor's element count.
    fn as_faer_mat(&self, rows: usize, cols: usize) -> MatRef<'_, T>;

    /// Mutable `rows x cols` view.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` differs from the tensor's element count.
    fn as_faer_mat_mut(&mut self, rows: usize, cols: usize) -> MatMut<'_, T>;
}

impl<T: Scalar + ComplexField> AsFaerMat<T> for Tensor<T> {
    fn as_faer_mat(&self, rows: usize, cols: usize) -> MatRef<'_, T> {
        assert_eq!(
            rows * cols,
            self.len(),
            "matrix view {rows}x{cols} must cover the tensor's {} elements",
            self.len()
        );
        MatRef::from_column_major_slice(self.data(), rows, cols)
    }

    fn as_faer_mat_mut(&mut self, rows: usize, cols: usize) -> MatMut<'_, T> {
        assert_eq!(
            rows * cols,
            self.len(),
            "matrix view {rows}x{cols} must cover the tensor's {} elements",
            self.len()
        );
        MatMut::from_column_major_slice_mut(self.data_mut(), rows, cols)
    }
}
