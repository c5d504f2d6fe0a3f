//! Computational backends.
//!
//! - [`GenericBackend`]: loop-based kernels, defined over any [`Scalar`];
//!   this is what exact integer contractions run on.
//! - faer interop: zero-copy matrix views over tensor data for scalars that
//!   faer's GEMM covers (both layouts are column-major).
//!
//! [`Scalar`]: crate::scalar::Scalar

mod faer_interop;
mod generic;

pub use faer_interop::AsFaerMat;
pub use generic::{matmul_into, GenericBackend};

use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Backend seam for axis permutation.
pub trait PermutationBackend {
    /// Copy `src` into `dest`, permuting axes; `dest` must already have the
    /// permuted shape.
    fn permute_into<ElT: Scalar>(dest: &mut Tensor<ElT>, src: &Tensor<ElT>, perm: &[usize]);
}
