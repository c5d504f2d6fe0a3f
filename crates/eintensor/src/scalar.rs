//! Scalar trait for tensor element types.

use std::fmt::Debug;

pub use faer::c64;

/// Trait for scalar types stored in tensors.
///
/// The trait itself carries only identity elements and marker bounds so that
/// exact integers qualify alongside the floating types; arithmetic bounds
/// (`Add`, `Mul`) are taken where they are used, on the contraction
/// functions. The faer-backed kernel additionally requires
/// [`faer_traits::ComplexField`], which `i64` does not implement.
pub trait Scalar: Copy + Debug + Default + PartialEq + 'static {
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;
}

impl Scalar for i64 {
    fn one() -> Self {
        1
    }
}

impl Scalar for f64 {
    fn one() -> Self {
        1.0
    }
}

impl Scalar for c64 {
    fn one() -> Self {
        c64::new(1.0, 0.0)
    }
}
