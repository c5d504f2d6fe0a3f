//! Reference contraction by direct summation.

use std::ops::{Add, Mul};

use crate::contract::plan::ContractionPlan;
use crate::error::TensorError;
use crate::operations::permutedims;
use crate::scalar::Scalar;
use crate::strides::{cartesian_to_linear, linear_to_cartesian_into};
use crate::tensor::Tensor;

/// Where one operand axis draws its index from during the summation.
#[derive(Clone, Copy)]
enum AxisSource {
    /// Slot in the output index tuple.
    Output(usize),
    /// Slot in the contracted index tuple.
    Summed(usize),
}

/// Contract two tensors by direct summation over the contracted index tuples.
///
/// Labels follow the crate convention: negative labels are summed over,
/// positive labels become output axes ordered by ascending label. This path
/// is the oracle the planned paths are checked against; it is exact for
/// integer scalars and slow for large tensors.
///
/// # Examples
///
/// ```
/// use eintensor::{contract, Tensor};
///
/// // Matrix product: C[i,k] = Σ_j A[i,j]·B[j,k]
/// let a: Tensor<i64> = Tensor::ones(&[2, 3]);
/// let b: Tensor<i64> = Tensor::ones(&[3, 4]);
/// let c = contract(&a, &[1, -1], &b, &[-1, 2]).unwrap();
/// assert_eq!(c.shape(), &[2, 4]);
/// assert_eq!(c.get(&[0, 0]), Some(&3));
/// ```
pub fn contract<ElT>(
    a: &Tensor<ElT>,
    labels_a: &[i32],
    b: &Tensor<ElT>,
    labels_b: &[i32],
) -> Result<Tensor<ElT>, TensorError>
where
    ElT: Scalar + Add<Output = ElT> + Mul<Output = ElT>,
{
    let plan = ContractionPlan::new(labels_a, a.shape(), labels_b, b.shape())?;

    let mut a_src = vec![AxisSource::Output(0); a.ndim()];
    for (slot, &ax) in plan.free_a.iter().enumerate() {
        a_src[ax] = AxisSource::Output(slot);
    }
    let mut b_src = vec![AxisSource::Output(0); b.ndim()];
    for (slot, &bx) in plan.free_b.iter().enumerate() {
        b_src[bx] = AxisSource::Output(plan.free_a.len() + slot);
    }
    for (c, &(ax, bx)) in plan.contracted.iter().enumerate() {
        a_src[ax] = AxisSource::Summed(c);
        b_src[bx] = AxisSource::Summed(c);
    }

    let summed_dims: Vec<usize> = plan.contracted.iter().map(|&(ax, _)| a.shape()[ax]).collect();
    let summed_total: usize = summed_dims.iter().product();

    // Scalar results keep shape [1].
    let result_shape: Vec<usize> = if plan.output_shape.is_empty() {
        vec![1]
    } else {
        plan.output_shape.clone()
    };
    let mut result = Tensor::zeros(&result_shape);

    let mut out_index = vec![0usize; plan.output_shape.len()];
    let mut sum_index = vec![0usize; summed_dims.len()];
    let mut a_index = vec![0usize; a.ndim()];
    let mut b_index = vec![0usize; b.ndim()];

    for out_linear in 0..result.len() {
        linear_to_cartesian_into(out_linear, &plan.output_shape, &mut out_index);

        let mut acc = ElT::zero();
        for sum_linear in 0..summed_total {
            linear_to_cartesian_into(sum_linear, &summed_dims, &mut sum_index);

            for (slot, src) in a_index.iter_mut().zip(&a_src) {
                *slot = match *src {
                    AxisSource::Output(k) => out_index[k],
                    AxisSource::Summed(c) => sum_index[c],
                };
            }
            for (slot, src) in b_index.iter_mut().zip(&b_src) {
                *slot = match *src {
                    AxisSource::Output(k) => out_index[k],
                    AxisSource::Summed(c) => sum_index[c],
                };
            }

            let av = a.data()[cartesian_to_linear(&a_index, a.strides())];
            let bv = b.data()[cartesian_to_linear(&b_index, b.strides())];
            acc = acc + av * bv;
        }
        result.data_mut()[out_linear] = acc;
    }

    if plan.permute_out {
        permutedims(&result, &plan.perm_out)
    } else {
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matrix_product() {
        let a: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        let b: Tensor<f64> = Tensor::from_vec(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
            &[3, 4],
        )
        .unwrap();

        let c = contract(&a, &[1, -1], &b, &[-1, 2]).unwrap();
        assert_eq!(c.shape(), &[2, 4]);

        // C[0,0] = A[0,0]·B[0,0] + A[0,1]·B[1,0] + A[0,2]·B[2,0]
        //        = 1·1 + 3·2 + 5·3 = 22
        assert_relative_eq!(*c.get(&[0, 0]).unwrap(), 22.0);
    }

    #[test]
    fn test_inner_product() {
        let a: Tensor<i64> = Tensor::from_vec(vec![1, 2, 3], &[3]).unwrap();
        let b: Tensor<i64> = Tensor::from_vec(vec![4, 5, 6], &[3]).unwrap();

        let c = contract(&a, &[-1], &b, &[-1]).unwrap();
        assert_eq!(c.shape(), &[1]);
        assert_eq!(c.get_linear(0), Some(&32));
    }

    #[test]
    fn test_outer_product() {
        let a: Tensor<i64> = Tensor::from_vec(vec![1, 2], &[2]).unwrap();
        let b: Tensor<i64> = Tensor::from_vec(vec![3, 4, 5], &[3]).unwrap();

        let c = contract(&a, &[1], &b, &[2]).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.get(&[1, 0]), Some(&6));
        assert_eq!(c.get(&[1, 2]), Some(&10));
    }

    #[test]
    fn test_output_sorted_by_label() {
        // C[j,i] when labels ask for output order [1=j from B, 2=i from A].
        let a: Tensor<i64> = Tensor::from_fn(&[2, 4], |ix| (ix[0] * 10 + ix[1]) as i64);
        let b: Tensor<i64> = Tensor::from_fn(&[4, 3], |ix| (ix[0] + ix[1] * 7) as i64);

        let c = contract(&a, &[2, -1], &b, &[-1, 1]).unwrap();
        assert_eq!(c.shape(), &[3, 2]);

        // c[j,i] = Σ_k a[i,k]·b[k,j]
        for j in 0..3 {
            for i in 0..2 {
                let mut expected = 0i64;
                for k in 0..4 {
                    expected += a.get(&[i, k]).unwrap() * b.get(&[k, j]).unwrap();
                }
                assert_eq!(c.get(&[j, i]), Some(&expected));
            }
        }
    }

    #[test]
    fn test_contracted_extent_mismatch() {
        let a: Tensor<f64> = Tensor::ones(&[2, 3]);
        let b: Tensor<f64> = Tensor::ones(&[4, 5]);
        assert!(contract(&a, &[1, -1], &b, &[-1, 2]).is_err());
    }

    #[test]
    fn test_4d_pair_contraction_small() {
        // C[i,j,r,s] = Σ_{p,q} A[i,j,p,q]·B[p,q,r,s] at extent 3, against
        // explicit nested loops.
        let n = 3usize;
        let shape = [n; 4];
        let a: Tensor<i64> = Tensor::from_fn(&shape, |ix| (ix[0] + ix[1] + ix[2] + ix[3]) as i64);
        let b: Tensor<i64> = Tensor::from_fn(&shape, |ix| (ix[0] * ix[1] * ix[2] * ix[3]) as i64);

        let c = contract(&a, &[1, 2, -1, -2], &b, &[-1, -2, 3, 4]).unwrap();
        assert_eq!(c.shape(), &[n, n, n, n]);

        for i in 0..n {
            for j in 0..n {
                for r in 0..n {
                    for s in 0..n {
                        let mut expected = 0i64;
                        for p in 0..n {
                            for q in 0..n {
                                expected += a.get(&[i, j, p, q]).unwrap()
                                    * b.get(&[p, q, r, s]).unwrap();
                            }
                        }
                        assert_eq!(c.get(&[i, j, r, s]), Some(&expected));
                    }
                }
            }
        }
    }
}
