//! Einsum subscript front-end.
//!
//! Translates two-operand subscript strings such as `"ijpq,pqrs->ijrs"` into
//! the crate's per-axis label convention and runs the planned contraction.
//!
//! Dialect:
//!
//! - exactly two comma-separated operands of ASCII letters;
//! - an index shared by both operands is summed over and may not appear in
//!   the output;
//! - a free index must appear in the output exactly once;
//! - with no `->`, the output is the free indices in alphabetical order;
//! - an explicit empty output (`"i,i->"`) is a full contraction and yields a
//!   shape-`[1]` tensor.
//!
//! Diagonals (`"ii"`), batch axes, and reductions over free indices are
//! rejected.

use std::ops::{Add, Mul};

use crate::contract::contract_gemm;
use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Contract two tensors according to an einsum subscript string.
///
/// # Examples
///
/// ```
/// use eintensor::{einsum, Tensor};
///
/// let a: Tensor<i64> = Tensor::from_fn(&[2, 3], |ix| (ix[0] + ix[1]) as i64);
/// let b: Tensor<i64> = Tensor::from_fn(&[3, 4], |ix| (ix[0] * ix[1]) as i64);
///
/// let c = einsum("ij,jk->ik", &a, &b)?;
/// assert_eq!(c.shape(), &[2, 4]);
/// # Ok::<(), eintensor::TensorError>(())
/// ```
///
/// # Errors
///
/// Fails on subscripts outside the dialect above, on subscripts that disagree
/// with the operand ranks, and on mismatched contracted extents.
pub fn einsum<ElT>(
    subscripts: &str,
    a: &Tensor<ElT>,
    b: &Tensor<ElT>,
) -> Result<Tensor<ElT>, TensorError>
where
    ElT: Scalar + Add<Output = ElT> + Mul<Output = ElT>,
{
    let (labels_a, labels_b) = parse_subscripts(subscripts, a.ndim(), b.ndim())?;
    contract_gemm(a, &labels_a, b, &labels_b)
}

/// Translate a subscript string into per-axis labels for both operands.
fn parse_subscripts(
    subscripts: &str,
    ndim_a: usize,
    ndim_b: usize,
) -> Result<(Vec<i32>, Vec<i32>), TensorError> {
    let subscripts = subscripts.trim();
    let (inputs, output) = match subscripts.split_once("->") {
        Some((lhs, rhs)) => (lhs.trim(), Some(rhs.trim())),
        None => (subscripts, None),
    };

    let mut operands = inputs.split(',');
    let (subs_a, subs_b) = match (operands.next(), operands.next(), operands.next()) {
        (Some(first), Some(second), None) => (first.trim(), second.trim()),
        _ => return Err(TensorError::OperandCount),
    };

    let chars_a = operand_indices(subs_a)?;
    let chars_b = operand_indices(subs_b)?;
    if chars_a.len() != ndim_a {
        return Err(TensorError::SubscriptRank {
            subscripts: subs_a.to_string(),
            ndim: ndim_a,
        });
    }
    if chars_b.len() != ndim_b {
        return Err(TensorError::SubscriptRank {
            subscripts: subs_b.to_string(),
            ndim: ndim_b,
        });
    }

    let shared: Vec<char> = chars_a
        .iter()
        .copied()
        .filter(|c| chars_b.contains(c))
        .collect();
    let free: Vec<char> = chars_a
        .iter()
        .chain(&chars_b)
        .copied()
        .filter(|c| !shared.contains(c))
        .collect();

    let output_indices: Vec<char> = match output {
        Some(out) => {
            let mut seen = Vec::with_capacity(out.len());
            for ch in out.chars() {
                if !ch.is_ascii_alphabetic() {
                    return Err(TensorError::InvalidSubscript { ch });
                }
                if seen.contains(&ch) {
                    return Err(TensorError::RepeatedOutputIndex { ch });
                }
                if shared.contains(&ch) {
                    return Err(TensorError::ContractedOutputIndex { ch });
                }
                if !free.contains(&ch) {
                    return Err(TensorError::UnknownOutputIndex { ch });
                }
                seen.push(ch);
            }
            if let Some(&ch) = free.iter().find(|c| !seen.contains(c)) {
                return Err(TensorError::MissingOutputIndex { ch });
            }
            seen
        }
        None => {
            let mut implicit = free.clone();
            implicit.sort_unstable();
            implicit
        }
    };

    let mut labels_a = vec![0i32; chars_a.len()];
    let mut labels_b = vec![0i32; chars_b.len()];
    for (pos, &ch) in output_indices.iter().enumerate() {
        let label = pos as i32 + 1;
        if let Some(ax) = chars_a.iter().position(|&c| c == ch) {
            labels_a[ax] = label;
        } else if let Some(bx) = chars_b.iter().position(|&c| c == ch) {
            labels_b[bx] = label;
        }
    }
    for (ax, ch) in chars_a.iter().enumerate() {
        if let Some(c) = shared.iter().position(|s| s == ch) {
            labels_a[ax] = -(c as i32) - 1;
        }
    }
    for (bx, ch) in chars_b.iter().enumerate() {
        if let Some(c) = shared.iter().position(|s| s == ch) {
            labels_b[bx] = -(c as i32) - 1;
        }
    }

    Ok((labels_a, labels_b))
}

/// One operand's index letters, rejecting non-letters and repeats.
fn operand_indices(subs: &str) -> Result<Vec<char>, TensorError> {
    let mut indices = Vec::with_capacity(subs.len());
    for ch in subs.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(TensorError::InvalidSubscript { ch });
        }
        if indices.contains(&ch) {
            return Err(TensorError::RepeatedIndex { ch });
        }
        indices.push(ch);
    }
    Ok(indices)
}
