//! Column-major stride and index arithmetic.

use smallvec::SmallVec;

/// Stack-allocated cartesian index buffer; spills to the heap above rank 8.
pub type IndexBuf = SmallVec<[usize; 8]>;

/// Compute column-major strides for a shape.
///
/// For shape `[d0, d1, d2, ...]` the strides are `[1, d0, d0*d1, ...]`.
///
/// # Examples
///
/// ```
/// use eintensor::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![1, 3, 12]);
/// assert_eq!(compute_strides(&[]), Vec::<usize>::new());
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(shape.len());
    let mut stride = 1;
    for &dim in shape {
        strides.push(stride);
        stride *= dim;
    }
    strides
}

/// Linear offset of a cartesian index.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides)
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Cartesian index of a linear offset.
pub fn linear_to_cartesian(linear: usize, shape: &[usize]) -> IndexBuf {
    let mut indices = IndexBuf::with_capacity(shape.len());
    indices.resize(shape.len(), 0);
    linear_to_cartesian_into(linear, shape, &mut indices);
    indices
}

/// Like [`linear_to_cartesian`], writing into a caller-provided buffer.
///
/// `out.len()` must equal `shape.len()`; hot loops reuse one buffer instead
/// of allocating per element.
#[inline]
pub fn linear_to_cartesian_into(mut linear: usize, shape: &[usize], out: &mut [usize]) {
    debug_assert_eq!(shape.len(), out.len());
    for (slot, &dim) in out.iter_mut().zip(shape) {
        *slot = linear % dim;
        linear /= dim;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides() {
        assert_eq!(compute_strides(&[50, 50, 50, 50]), vec![1, 50, 2500, 125000]);
        assert_eq!(compute_strides(&[7]), vec![1]);
    }

    #[test]
    fn test_cartesian_to_linear() {
        let strides = compute_strides(&[3, 4, 5]);
        assert_eq!(cartesian_to_linear(&[0, 0, 0], &strides), 0);
        assert_eq!(cartesian_to_linear(&[1, 0, 0], &strides), 1);
        assert_eq!(cartesian_to_linear(&[0, 1, 0], &strides), 3);
        assert_eq!(cartesian_to_linear(&[2, 3, 4], &strides), 2 + 3 * 3 + 4 * 12);
    }

    #[test]
    fn test_linear_to_cartesian() {
        assert_eq!(linear_to_cartesian(0, &[3, 4]).as_slice(), &[0, 0]);
        assert_eq!(linear_to_cartesian(5, &[3, 4]).as_slice(), &[2, 1]);
    }

    #[test]
    fn test_roundtrip() {
        let shape = [3, 4, 5];
        let strides = compute_strides(&shape);
        for linear in 0..shape.iter().product() {
            let cartesian = linear_to_cartesian(linear, &shape);
            assert_eq!(cartesian_to_linear(&cartesian, &strides), linear);
        }
    }
}
