//! End-to-end tests for the einsum contraction pipeline, covering the
//! deterministic index-formula tensors the benchmark is built from.

use approx::assert_relative_eq;
use eintensor::{contract, contract_faer, contract_gemm, einsum, Tensor};
use rand::Rng;

/// Benchmark extent: 50 along each of the four axes.
const EXTENT: usize = 50;

/// I[i,j,k,l] = i + j + k + l
fn addition_tensor(extent: usize) -> Tensor<i64> {
    Tensor::from_fn(&[extent; 4], |ix| (ix[0] + ix[1] + ix[2] + ix[3]) as i64)
}

/// D[i,j,k,l] = i · j · k · l
fn product_tensor(extent: usize) -> Tensor<i64> {
    Tensor::from_fn(&[extent; 4], |ix| (ix[0] * ix[1] * ix[2] * ix[3]) as i64)
}

#[test]
fn test_generator_formulas_hold_at_full_extent() {
    let i_tensor = addition_tensor(EXTENT);
    let d_tensor = product_tensor(EXTENT);

    assert_eq!(i_tensor.shape(), &[EXTENT; 4]);
    assert_eq!(d_tensor.shape(), &[EXTENT; 4]);

    for i in 0..EXTENT {
        for j in 0..EXTENT {
            for k in 0..EXTENT {
                for l in 0..EXTENT {
                    let ix = [i, j, k, l];
                    assert_eq!(i_tensor.get(&ix), Some(&((i + j + k + l) as i64)));
                    assert_eq!(d_tensor.get(&ix), Some(&((i * j * k * l) as i64)));
                }
            }
        }
    }
}

#[test]
fn test_contraction_matches_brute_force_at_reduced_extent() {
    let n = 6;
    let a = addition_tensor(n);
    let b = product_tensor(n);

    let j_tensor = einsum("ijpq,pqrs->ijrs", &a, &b).unwrap();
    assert_eq!(j_tensor.shape(), &[n; 4]);

    for i in 0..n {
        for j in 0..n {
            for r in 0..n {
                for s in 0..n {
                    let mut expected = 0i64;
                    for p in 0..n {
                        for q in 0..n {
                            expected +=
                                a.get(&[i, j, p, q]).unwrap() * b.get(&[p, q, r, s]).unwrap();
                        }
                    }
                    assert_eq!(j_tensor.get(&[i, j, r, s]), Some(&expected));
                }
            }
        }
    }
}

#[test]
fn test_benchmark_spot_values_at_full_extent() {
    // Single output elements of the full 50^4 contraction, evaluated from
    // the definition (2500 products each).
    let a = addition_tensor(EXTENT);
    let b = product_tensor(EXTENT);

    let element = |i: usize, j: usize, r: usize, s: usize| -> i64 {
        let mut acc = 0i64;
        for p in 0..EXTENT {
            for q in 0..EXTENT {
                acc += a.get(&[i, j, p, q]).unwrap() * b.get(&[p, q, r, s]).unwrap();
            }
        }
        acc
    };

    // D[p,q,0,0] = 0 for all p, q, so J[0,0,0,0] vanishes.
    assert_eq!(element(0, 0, 0, 0), 0);

    // J[1,1,1,1] = Σ_{p,q} (2+p+q)·p·q over 0..50.
    assert_eq!(element(1, 1, 1, 1), 102_042_500);
}

#[test]
fn test_benchmark_spot_values_at_reduced_extent() {
    let n = 8;
    let j_tensor = einsum("ijpq,pqrs->ijrs", &addition_tensor(n), &product_tensor(n)).unwrap();

    assert_eq!(j_tensor.get(&[0, 0, 0, 0]), Some(&0));

    // Σ_{p,q<8} (2+p+q)·p·q = 9408
    assert_eq!(j_tensor.get(&[1, 1, 1, 1]), Some(&9408));
}

#[test]
fn test_output_shape_follows_free_extents() {
    let a: Tensor<i64> = Tensor::from_fn(&[2, 3, 4, 5], |ix| (ix[0] + 2 * ix[1] + ix[3]) as i64);
    let b: Tensor<i64> = Tensor::from_fn(&[4, 5, 6, 7], |ix| (ix[0] * ix[2] + ix[1]) as i64);

    let c = einsum("ijpq,pqrs->ijrs", &a, &b).unwrap();
    assert_eq!(c.shape(), &[2, 3, 6, 7]);

    let reference = contract(&a, &[1, 2, -1, -2], &b, &[-1, -2, 3, 4]).unwrap();
    assert_eq!(c, reference);
}

#[test]
fn test_paths_agree_on_random_i64() {
    let mut rng = rand::rng();
    let a: Tensor<i64> = Tensor::from_fn(&[4, 3, 5], |_| rng.random_range(-9..10));
    let b: Tensor<i64> = Tensor::from_fn(&[5, 3, 6], |_| rng.random_range(-9..10));

    let labels_a = [1, -1, -2];
    let labels_b = [-2, -1, 2];

    let planned = contract_gemm(&a, &labels_a, &b, &labels_b).unwrap();
    let reference = contract(&a, &labels_a, &b, &labels_b).unwrap();
    assert_eq!(planned, reference);
}

#[test]
fn test_paths_agree_on_random_f64() {
    let mut rng = rand::rng();
    let a: Tensor<f64> = Tensor::from_fn(&[4, 3, 5], |_| rng.random::<f64>() - 0.5);
    let b: Tensor<f64> = Tensor::from_fn(&[5, 3, 6], |_| rng.random::<f64>() - 0.5);

    let labels_a = [1, -1, -2];
    let labels_b = [-2, -1, 2];

    let reference = contract(&a, &labels_a, &b, &labels_b).unwrap();
    let planned = contract_gemm(&a, &labels_a, &b, &labels_b).unwrap();
    let via_faer = contract_faer(&a, &labels_a, &b, &labels_b).unwrap();

    assert_eq!(planned.shape(), reference.shape());
    assert_eq!(via_faer.shape(), reference.shape());
    for i in 0..reference.len() {
        let want = *reference.get_linear(i).unwrap();
        assert_relative_eq!(*planned.get_linear(i).unwrap(), want, epsilon = 1e-12);
        assert_relative_eq!(*via_faer.get_linear(i).unwrap(), want, epsilon = 1e-12);
    }
}

#[test]
fn test_contraction_is_deterministic() {
    let n = 8;
    let run = || einsum("ijpq,pqrs->ijrs", &addition_tensor(n), &product_tensor(n)).unwrap();
    assert_eq!(run(), run());
}
