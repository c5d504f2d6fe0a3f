//! Planned contraction: permute, flatten to matrices, multiply, reshape.
//!
//! Two kernels sit behind the same [`ContractionPlan`]:
//!
//! - [`contract_gemm`] runs the loop kernel from the generic backend and is
//!   defined over any [`Scalar`], exact integer contractions included.
//! - [`contract_faer`] hands the flattened matrices to faer's `matmul` and is
//!   limited to the scalars faer covers (`f64`, `c64`).

use std::ops::{Add, Mul};

use faer::linalg::matmul::matmul;
use faer::{Accum, MatMut, Par};
use faer_traits::ComplexField;

use crate::backend::{matmul_into, AsFaerMat};
use crate::contract::plan::ContractionPlan;
use crate::error::TensorError;
use crate::operations::permutedims;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Contract two tensors through the planned GEMM-shaped path.
///
/// The operands are permuted into `[free..., contracted...]` /
/// `[contracted..., free...]` axis order (skipped when already there),
/// flattened to matrices, multiplied with the generic loop kernel, and the
/// product is reshaped and permuted into ascending-label order. Agrees
/// exactly with [`contract`](crate::contract::contract) for integer scalars.
///
/// # Examples
///
/// ```
/// use eintensor::{contract_gemm, Tensor};
///
/// let a: Tensor<i64> = Tensor::ones(&[2, 3]);
/// let b: Tensor<i64> = Tensor::ones(&[3, 4]);
/// let c = contract_gemm(&a, &[1, -1], &b, &[-1, 2]).unwrap();
/// assert_eq!(c.shape(), &[2, 4]);
/// assert_eq!(c.get(&[1, 3]), Some(&3));
/// ```
pub fn contract_gemm<ElT>(
    a: &Tensor<ElT>,
    labels_a: &[i32],
    b: &Tensor<ElT>,
    labels_b: &[i32],
) -> Result<Tensor<ElT>, TensorError>
where
    ElT: Scalar + Add<Output = ElT> + Mul<Output = ElT>,
{
    let plan = ContractionPlan::new(labels_a, a.shape(), labels_b, b.shape())?;

    // Operands already in GEMM order are borrowed, not copied.
    let a_work;
    let a_data: &[ElT] = if plan.permute_a {
        a_work = permutedims(a, &plan.perm_a)?;
        a_work.data()
    } else {
        a.data()
    };
    let b_work;
    let b_data: &[ElT] = if plan.permute_b {
        b_work = permutedims(b, &plan.perm_b)?;
        b_work.data()
    } else {
        b.data()
    };

    if plan.is_full_contraction() {
        return Ok(dot(a_data, b_data));
    }

    let (m, k, n) = (plan.dleft, plan.dmid, plan.dright);
    let mut out = vec![ElT::zero(); m * n];
    matmul_into(&mut out, a_data, b_data, m, k, n);

    finish(out, &plan)
}

/// Contract two tensors through faer's matrix product.
///
/// Same plan as [`contract_gemm`], with the flattened matrices handed to
/// faer. Runs sequentially (`Par::Seq`).
pub fn contract_faer<ElT>(
    a: &Tensor<ElT>,
    labels_a: &[i32],
    b: &Tensor<ElT>,
    labels_b: &[i32],
) -> Result<Tensor<ElT>, TensorError>
where
    ElT: Scalar + ComplexField + Add<Output = ElT> + Mul<Output = ElT>,
{
    let plan = ContractionPlan::new(labels_a, a.shape(), labels_b, b.shape())?;

    let a_work;
    let a_ref: &Tensor<ElT> = if plan.permute_a {
        a_work = permutedims(a, &plan.perm_a)?;
        &a_work
    } else {
        a
    };
    let b_work;
    let b_ref: &Tensor<ElT> = if plan.permute_b {
        b_work = permutedims(b, &plan.perm_b)?;
        &b_work
    } else {
        b
    };

    if plan.is_full_contraction() {
        return Ok(dot(a_ref.data(), b_ref.data()));
    }

    let (m, k, n) = (plan.dleft, plan.dmid, plan.dright);
    let mut out = vec![ElT::zero(); m * n];
    matmul(
        MatMut::from_column_major_slice_mut(&mut out, m, n),
        Accum::Replace,
        a_ref.as_faer_mat(m, k),
        b_ref.as_faer_mat(k, n),
        ElT::one(),
        Par::Seq,
    );

    finish(out, &plan)
}

/// Dot product of two aligned flat buffers, as a shape-`[1]` tensor.
fn dot<ElT>(a: &[ElT], b: &[ElT]) -> Tensor<ElT>
where
    ElT: Scalar + Add<Output = ElT> + Mul<Output = ElT>,
{
    let mut acc = ElT::zero();
    for (&av, &bv) in a.iter().zip(b) {
        acc = acc + av * bv;
    }
    Tensor::from_fn(&[1], |_| acc)
}

/// Reshape the flat product to the natural output shape, then permute the
/// axes into ascending-label order.
fn finish<ElT: Scalar>(out: Vec<ElT>, plan: &ContractionPlan) -> Result<Tensor<ElT>, TensorError> {
    let result = Tensor::from_vec(out, &plan.output_shape)?;
    if plan.permute_out {
        permutedims(&result, &plan.perm_out)
    } else {
        Ok(result)
    }
}
