//! Loop-based backend kernels.

use std::ops::{Add, Mul};

use crate::backend::PermutationBackend;
use crate::scalar::Scalar;
use crate::strides::{cartesian_to_linear, linear_to_cartesian_into};
use crate::tensor::Tensor;

/// Backend of plain loops, defined over any [`Scalar`].
pub struct GenericBackend;

impl PermutationBackend for GenericBackend {
    fn permute_into<ElT: Scalar>(dest: &mut Tensor<ElT>, src: &Tensor<ElT>, perm: &[usize]) {
        let src_shape = src.shape();
        let dest_strides = dest.strides().to_vec();

        let mut src_index = vec![0usize; src_shape.len()];
        let mut dest_index = vec![0usize; src_shape.len()];
        for linear_src in 0..src.len() {
            linear_to_cartesian_into(linear_src, src_shape, &mut src_index);
            // dest axis i draws from src axis perm[i]
            for (slot, &p) in dest_index.iter_mut().zip(perm) {
                *slot = src_index[p];
            }
            let linear_dest = cartesian_to_linear(&dest_index, &dest_strides);
            dest.data_mut()[linear_dest] = src.data()[linear_src];
        }
    }
}

/// Column-major matrix product `dst(m,n) += a(m,k) · b(k,n)` over flat
/// buffers.
///
/// The inner loop runs down one column of `a` and `dst` at a time, so both
/// accesses are contiguous. Exact for integer scalars; this is the kernel the
/// planned contraction path flattens into.
///
/// # Panics
///
/// Panics if a buffer length disagrees with its matrix dimensions.
pub fn matmul_into<ElT>(dst: &mut [ElT], a: &[ElT], b: &[ElT], m: usize, k: usize, n: usize)
where
    ElT: Scalar + Add<Output = ElT> + Mul<Output = ElT>,
{
    assert_eq!(dst.len(), m * n, "dst length must be m * n");
    assert_eq!(a.len(), m * k, "a length must be m * k");
    assert_eq!(b.len(), k * n, "b length must be k * n");

    for j in 0..n {
        let dst_col = &mut dst[j * m..(j + 1) * m];
        for l in 0..k {
            let b_lj = b[l + j * k];
            let a_col = &a[l * m..(l + 1) * m];
            for (d, &av) in dst_col.iter_mut().zip(a_col) {
                *d = *d + av * b_lj;
            }
        }
    }
}
