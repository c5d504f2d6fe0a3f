//! Axis permutation.

use crate::backend::{GenericBackend, PermutationBackend};
use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Permute the dimensions of a tensor, returning a new tensor.
///
/// `perm[i]` names the source dimension for the i-th dimension of the result.
///
/// # Errors
///
/// Returns [`TensorError::InvalidPermutation`] if `perm` is not a permutation
/// of `0..ndim`.
pub fn permutedims<ElT: Scalar>(
    tensor: &Tensor<ElT>,
    perm: &[usize],
) -> Result<Tensor<ElT>, TensorError> {
    validate_permutation(perm, tensor.ndim())?;

    let new_shape: Vec<usize> = perm.iter().map(|&p| tensor.shape()[p]).collect();
    let mut result = Tensor::zeros(&new_shape);
    permutedims_into(&mut result, tensor, perm);
    Ok(result)
}

/// Permute dimensions into an existing tensor of the permuted shape.
///
/// Dispatches to the backend; `dest` must already have the permuted shape.
pub fn permutedims_into<ElT: Scalar>(dest: &mut Tensor<ElT>, src: &Tensor<ElT>, perm: &[usize]) {
    GenericBackend::permute_into(dest, src, perm);
}

fn validate_permutation(perm: &[usize], ndim: usize) -> Result<(), TensorError> {
    let invalid = || TensorError::InvalidPermutation {
        perm: perm.to_vec(),
        ndim,
    };
    if perm.len() != ndim {
        return Err(invalid());
    }
    let mut seen = vec![false; ndim];
    for &p in perm {
        if p >= ndim || seen[p] {
            return Err(invalid());
        }
        seen[p] = true;
    }
    Ok(())
}
