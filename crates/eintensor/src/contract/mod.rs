//! Pairwise tensor contraction.
//!
//! Contractions are expressed with per-axis integer labels:
//!
//! - negative labels mark contracted axes, matched one-to-one across the two
//!   operands (equal extents required);
//! - positive labels mark output axes; the result orders its axes by
//!   ascending label.
//!
//! Three entry points share that convention and produce identical values:
//!
//! - [`contract`]: direct summation, the reference oracle,
//! - [`contract_gemm`]: permute / flatten / loop-kernel matrix product,
//!   defined over any scalar (exact for integers),
//! - [`contract_faer`]: same plan with faer's matrix product, for the float
//!   scalars faer covers.
//!
//! # Example
//!
//! ```
//! use eintensor::{contract_gemm, Tensor};
//!
//! // C[i,k] = Σ_j A[i,j]·B[j,k]: labels A[1,-1], B[-1,2]
//! let a: Tensor<i64> = Tensor::ones(&[2, 3]);
//! let b: Tensor<i64> = Tensor::ones(&[3, 4]);
//! let c = contract_gemm(&a, &[1, -1], &b, &[-1, 2]).unwrap();
//! assert_eq!(c.shape(), &[2, 4]);
//! ```

mod gemm;
mod naive;
mod plan;

pub use gemm::{contract_faer, contract_gemm};
pub use naive::contract;
pub use plan::ContractionPlan;
