//! eintensor - dense n-dimensional tensors with einsum-style contraction.
//!
//! The crate exists to time and test pairwise tensor contractions over exact
//! integer and floating scalars.
//!
//! # Architecture
//!
//! ```text
//! einsum("ijpq,pqrs->ijrs", &a, &b)      subscript front-end (einsum module)
//!     → per-axis integer labels          negative = summed, positive = output
//!     → ContractionPlan                  free/contracted split, GEMM extents,
//!                                        operand and output permutations
//!     → permute / flatten / multiply     backend kernels (loop or faer)
//! ```
//!
//! # Example
//!
//! ```
//! use eintensor::{einsum, Tensor};
//!
//! // C[i,k] = Σ_j A[i,j]·B[j,k], exactly, over i64
//! let a: Tensor<i64> = Tensor::from_fn(&[2, 3], |ix| (ix[0] + ix[1]) as i64);
//! let b: Tensor<i64> = Tensor::ones(&[3, 4]);
//!
//! let c = einsum("ij,jk->ik", &a, &b)?;
//! assert_eq!(c.shape(), &[2, 4]);
//! # Ok::<(), eintensor::TensorError>(())
//! ```

pub mod backend;
pub mod contract;
pub mod einsum;
pub mod error;
pub mod operations;
pub mod scalar;
pub mod storage;
pub mod strides;
pub mod tensor;

pub use contract::{contract, contract_faer, contract_gemm, ContractionPlan};
pub use einsum::einsum;
pub use error::TensorError;
pub use scalar::{c64, Scalar};
pub use storage::Dense;
pub use tensor::Tensor;
