//! Contraction analysis.
//!
//! [`ContractionPlan`] validates a pair of label lists against the operand
//! shapes and derives everything the GEMM-shaped paths need: the
//! free/contracted axis split, the flattened matrix extents, and the three
//! permutations (operands into GEMM order, output into label order).

use crate::error::TensorError;

/// Everything derived from one pair of operand label lists.
///
/// For a contraction `C = A · B` the planned execution is
/// `C(dleft, dright) = A(dleft, dmid) · B(dmid, dright)` after permuting A to
/// `[free..., contracted...]` and B to `[contracted..., free...]` axis order.
///
/// # Examples
///
/// ```
/// use eintensor::contract::ContractionPlan;
///
/// // Matrix product C[i,k] = Σ_j A[i,j]·B[j,k]: labels A[1,-1], B[-1,2]
/// let plan = ContractionPlan::new(&[1, -1], &[2, 3], &[-1, 2], &[3, 4]).unwrap();
/// assert_eq!((plan.dleft, plan.dmid, plan.dright), (2, 3, 4));
/// assert!(!plan.permute_a && !plan.permute_b && !plan.permute_out);
/// ```
#[derive(Debug, Clone)]
pub struct ContractionPlan {
    /// Contracted axis pairs `(axis in A, axis in B)`, in A's axis order.
    pub contracted: Vec<(usize, usize)>,

    /// A's free axes, ascending.
    pub free_a: Vec<usize>,

    /// B's free axes, ascending.
    pub free_b: Vec<usize>,

    /// Product of A's free extents.
    pub dleft: usize,

    /// Product of the contracted extents.
    pub dmid: usize,

    /// Product of B's free extents.
    pub dright: usize,

    /// Whether A needs permuting into `[free..., contracted...]` order.
    pub permute_a: bool,

    /// Permutation taking A into GEMM order.
    pub perm_a: Vec<usize>,

    /// Whether B needs permuting into `[contracted..., free...]` order.
    pub permute_b: bool,

    /// Permutation taking B into GEMM order.
    pub perm_b: Vec<usize>,

    /// Whether the natural output needs permuting into label order.
    pub permute_out: bool,

    /// Permutation taking the natural output into ascending-label order.
    pub perm_out: Vec<usize>,

    /// Labels of the natural output axes (A's free, then B's free).
    pub output_labels: Vec<i32>,

    /// Extents of the natural output axes, before `perm_out` is applied.
    pub output_shape: Vec<usize>,
}

impl ContractionPlan {
    /// Validate labels against shapes and derive the plan.
    ///
    /// Label convention: negative labels are summed over and must pair up
    /// one-to-one across the operands with equal extents; positive labels are
    /// output axes and must be unique. Zero is not a label.
    ///
    /// # Errors
    ///
    /// Rejects label lists whose length differs from the operand rank, labels
    /// repeated within an operand, unpaired negative labels, positive labels
    /// appearing in both operands, and contracted extents that disagree.
    pub fn new(
        labels_a: &[i32],
        shape_a: &[usize],
        labels_b: &[i32],
        shape_b: &[usize],
    ) -> Result<Self, TensorError> {
        if labels_a.len() != shape_a.len() {
            return Err(TensorError::WrongNumberOfIndices {
                expected: shape_a.len(),
                actual: labels_a.len(),
            });
        }
        if labels_b.len() != shape_b.len() {
            return Err(TensorError::WrongNumberOfIndices {
                expected: shape_b.len(),
                actual: labels_b.len(),
            });
        }

        for labels in [labels_a, labels_b] {
            for (i, &l) in labels.iter().enumerate() {
                if l == 0 {
                    return Err(TensorError::UnmatchedLabel { label: 0 });
                }
                if labels[..i].contains(&l) {
                    return Err(TensorError::DuplicateLabel { label: l });
                }
            }
        }
        for &l in labels_a {
            if l > 0 && labels_b.contains(&l) {
                return Err(TensorError::DuplicateLabel { label: l });
            }
        }

        let mut contracted = Vec::new();
        for (i, &la) in labels_a.iter().enumerate() {
            if la > 0 {
                continue;
            }
            match labels_b.iter().position(|&lb| lb == la) {
                Some(j) => {
                    if shape_a[i] != shape_b[j] {
                        return Err(TensorError::ShapeMismatch {
                            expected: shape_a[i],
                            actual: shape_b[j],
                        });
                    }
                    contracted.push((i, j));
                }
                None => return Err(TensorError::UnmatchedLabel { label: la }),
            }
        }
        for &lb in labels_b {
            if lb < 0 && !labels_a.contains(&lb) {
                return Err(TensorError::UnmatchedLabel { label: lb });
            }
        }

        let free_a: Vec<usize> = (0..labels_a.len()).filter(|&i| labels_a[i] > 0).collect();
        let free_b: Vec<usize> = (0..labels_b.len()).filter(|&j| labels_b[j] > 0).collect();

        let dleft = free_a.iter().map(|&i| shape_a[i]).product();
        let dmid = contracted.iter().map(|&(i, _)| shape_a[i]).product();
        let dright = free_b.iter().map(|&j| shape_b[j]).product();

        let perm_a: Vec<usize> = free_a
            .iter()
            .copied()
            .chain(contracted.iter().map(|&(i, _)| i))
            .collect();
        let perm_b: Vec<usize> = contracted
            .iter()
            .map(|&(_, j)| j)
            .chain(free_b.iter().copied())
            .collect();

        let output_labels: Vec<i32> = free_a
            .iter()
            .map(|&i| labels_a[i])
            .chain(free_b.iter().map(|&j| labels_b[j]))
            .collect();
        let output_shape: Vec<usize> = free_a
            .iter()
            .map(|&i| shape_a[i])
            .chain(free_b.iter().map(|&j| shape_b[j]))
            .collect();

        // perm_out[new_axis] = natural axis holding the new_axis-th smallest label
        let mut perm_out: Vec<usize> = (0..output_labels.len()).collect();
        perm_out.sort_by_key(|&i| output_labels[i]);

        Ok(Self {
            permute_a: !is_identity(&perm_a),
            permute_b: !is_identity(&perm_b),
            permute_out: !is_identity(&perm_out),
            contracted,
            free_a,
            free_b,
            dleft,
            dmid,
            dright,
            perm_a,
            perm_b,
            perm_out,
            output_labels,
            output_shape,
        })
    }

    /// No contracted axes: the contraction is an outer product.
    pub fn is_outer_product(&self) -> bool {
        self.contracted.is_empty()
    }

    /// No free axes: the contraction reduces to a scalar.
    pub fn is_full_contraction(&self) -> bool {
        self.free_a.is_empty() && self.free_b.is_empty()
    }
}

fn is_identity(perm: &[usize]) -> bool {
    perm.iter().enumerate().all(|(i, &p)| i == p)
}
