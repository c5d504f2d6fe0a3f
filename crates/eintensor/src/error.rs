//! Error types for eintensor.

use thiserror::Error;

/// Errors that can occur in tensor construction, contraction, and
/// einsum-subscript parsing.
#[derive(Debug, Error)]
pub enum TensorError {
    /// Data length or contracted extent does not match what the shape requires.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Index out of bounds along one dimension.
    #[error("index {index} out of bounds for dimension of size {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },

    /// Wrong number of indices or labels for the tensor's rank.
    #[error("wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Not a valid permutation of `0..ndim`.
    #[error("invalid permutation {perm:?} for tensor of rank {ndim}")]
    InvalidPermutation { perm: Vec<usize>, ndim: usize },

    /// A contraction label appears an unexpected number of times.
    #[error("label {label} is not matched by exactly one axis of each operand")]
    UnmatchedLabel { label: i32 },

    /// A free label is assigned to more than one axis.
    #[error("label {label} is assigned to more than one output axis")]
    DuplicateLabel { label: i32 },

    /// The subscript string does not name exactly two operands.
    #[error("einsum subscripts must name exactly two comma-separated operands")]
    OperandCount,

    /// Operand subscripts disagree with the operand's rank.
    #[error("subscripts {subscripts:?} do not match operand rank {ndim}")]
    SubscriptRank { subscripts: String, ndim: usize },

    /// A subscript character outside `a-z` / `A-Z`.
    #[error("invalid subscript character {ch:?}")]
    InvalidSubscript { ch: char },

    /// The same index letter twice in one operand (diagonals are unsupported).
    #[error("index {ch:?} appears more than once in a single operand")]
    RepeatedIndex { ch: char },

    /// An output index that occurs in neither operand.
    #[error("output index {ch:?} does not appear in any operand")]
    UnknownOutputIndex { ch: char },

    /// An output index that is shared by both operands (batch axes are
    /// unsupported; shared indices are always summed over).
    #[error("index {ch:?} is summed over and cannot appear in the output")]
    ContractedOutputIndex { ch: char },

    /// The same index letter twice in the output.
    #[error("output index {ch:?} appears more than once")]
    RepeatedOutputIndex { ch: char },

    /// A free index left out of an explicit output (reductions over free
    /// indices are unsupported).
    #[error("free index {ch:?} is missing from the output")]
    MissingOutputIndex { ch: char },
}
