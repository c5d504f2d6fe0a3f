//! N-dimensional dense tensor type.
//!
//! A tensor is a flat [`Dense`] buffer plus shape and column-major strides.
//! Elements are addressed either linearly (storage order) or by cartesian
//! index; all construction is deterministic and tensors are never mutated by
//! the contraction operations.

use std::fmt;

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::storage::Dense;
use crate::strides::{cartesian_to_linear, compute_strides};

/// A dense n-dimensional tensor in column-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<ElT: Scalar> {
    storage: Dense<ElT>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<ElT: Scalar> Tensor<ElT> {
    /// Zero-initialized tensor of the given shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use eintensor::Tensor;
    ///
    /// let t: Tensor<i64> = Tensor::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            storage: Dense::zeros(shape.iter().product()),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        let mut t = Self::zeros(shape);
        t.fill(ElT::one());
        t
    }

    /// Build a tensor from data in column-major order.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the data length does not
    /// match the shape.
    pub fn from_vec(data: Vec<ElT>, shape: &[usize]) -> Result<Self, TensorError> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            storage: Dense::from_vec(data),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        })
    }

    /// Build a tensor from a closed-form function of the cartesian index.
    ///
    /// The function receives one `&[usize]` per element, with
    /// `index.len() == shape.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eintensor::Tensor;
    ///
    /// let t: Tensor<i64> = Tensor::from_fn(&[2, 2], |ix| (ix[0] * 10 + ix[1]) as i64);
    /// assert_eq!(t.get(&[1, 0]), Some(&10));
    /// assert_eq!(t.get(&[1, 1]), Some(&11));
    /// ```
    pub fn from_fn<F>(shape: &[usize], mut f: F) -> Self
    where
        F: FnMut(&[usize]) -> ElT,
    {
        let len: usize = shape.iter().product();
        let mut data = Vec::with_capacity(len);
        if len > 0 {
            // Odometer walk in storage order: the first axis varies fastest.
            let mut index = vec![0usize; shape.len()];
            'next: loop {
                data.push(f(&index));
                for (slot, &dim) in index.iter_mut().zip(shape) {
                    *slot += 1;
                    if *slot < dim {
                        continue 'next;
                    }
                    *slot = 0;
                }
                break;
            }
        }
        Self {
            storage: Dense::from_vec(data),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Shape of the tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Rank (number of dimensions).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the tensor holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Column-major strides.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Underlying data in storage order.
    #[inline]
    pub fn data(&self) -> &[ElT] {
        self.storage.as_slice()
    }

    /// Mutable underlying data in storage order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [ElT] {
        self.storage.as_mut_slice()
    }

    /// Element at a linear storage offset.
    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&ElT> {
        self.storage.as_slice().get(i)
    }

    /// Element at a cartesian index, or `None` if the index is out of bounds
    /// or of the wrong rank.
    pub fn get(&self, indices: &[usize]) -> Option<&ElT> {
        self.check_indices(indices).ok()?;
        self.get_linear(cartesian_to_linear(indices, &self.strides))
    }

    /// Mutable element at a cartesian index.
    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut ElT> {
        self.check_indices(indices).ok()?;
        let linear = cartesian_to_linear(indices, &self.strides);
        self.storage.as_mut_slice().get_mut(linear)
    }

    /// Write one element.
    ///
    /// # Errors
    ///
    /// Returns an error if the index has the wrong rank or is out of bounds.
    pub fn set(&mut self, indices: &[usize], value: ElT) -> Result<(), TensorError> {
        self.check_indices(indices)?;
        let linear = cartesian_to_linear(indices, &self.strides);
        self.storage.as_mut_slice()[linear] = value;
        Ok(())
    }

    /// Fill every element with a value.
    pub fn fill(&mut self, value: ElT) {
        for x in self.storage.as_mut_slice() {
            *x = value;
        }
    }

    /// Permute the dimensions, returning a new tensor.
    ///
    /// `perm[i]` names the source dimension for the i-th dimension of the
    /// result.
    ///
    /// # Examples
    ///
    /// ```
    /// use eintensor::Tensor;
    ///
    /// let t: Tensor<i64> = Tensor::from_fn(&[2, 3], |ix| (ix[0] * 10 + ix[1]) as i64);
    /// let t2 = t.permutedims(&[1, 0]).unwrap();
    /// assert_eq!(t2.shape(), &[3, 2]);
    /// assert_eq!(t.get(&[1, 2]), t2.get(&[2, 1]));
    /// ```
    pub fn permutedims(&self, perm: &[usize]) -> Result<Self, TensorError> {
        crate::operations::permutedims(self, perm)
    }

    fn check_indices(&self, indices: &[usize]) -> Result<(), TensorError> {
        if indices.len() != self.ndim() {
            return Err(TensorError::WrongNumberOfIndices {
                expected: self.ndim(),
                actual: indices.len(),
            });
        }
        for (&idx, &dim) in indices.iter().zip(&self.shape) {
            if idx >= dim {
                return Err(TensorError::IndexOutOfBounds {
                    index: idx,
                    dim_size: dim,
                });
            }
        }
        Ok(())
    }
}

/// Nested-bracket rendering, one bracket pair per dimension, outermost first.
///
/// ```
/// use eintensor::Tensor;
///
/// let t: Tensor<i64> = Tensor::from_fn(&[2, 2], |ix| (ix[0] + ix[1]) as i64);
/// assert_eq!(t.to_string(), "[[0 1] [1 2]]");
/// ```
impl<ElT: Scalar + fmt::Display> fmt::Display for Tensor<ElT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn axis<ElT: Scalar + fmt::Display>(
            t: &Tensor<ElT>,
            f: &mut fmt::Formatter<'_>,
            dim: usize,
            index: &mut [usize],
        ) -> fmt::Result {
            if dim == t.ndim() {
                let linear = cartesian_to_linear(index, t.strides());
                return write!(f, "{}", t.data()[linear]);
            }
            write!(f, "[")?;
            for i in 0..t.shape()[dim] {
                index[dim] = i;
                axis(t, f, dim + 1, index)?;
                if i + 1 < t.shape()[dim] {
                    write!(f, " ")?;
                }
            }
            write!(f, "]")
        }

        let mut index = vec![0usize; self.ndim()];
        axis(self, f, 0, &mut index)
    }
}
