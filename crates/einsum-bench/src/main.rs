//! Times one einsum contraction over deterministically built 4-d tensors.
//!
//! Builds I[i,j,k,l] = i+j+k+l and D[i,j,k,l] = i·j·k·l at extent 50, runs
//! `einsum("ijpq,pqrs->ijrs", I, D)` once (about 1.6×10^10 exact integer
//! multiply-accumulates), and prints the wall-clock duration of that single
//! call. Tensor construction happens outside the timed region.

use std::hint::black_box;
use std::time::{Duration, Instant};

use eintensor::{einsum, Tensor, TensorError};

/// Extent of every axis of both operands.
const EXTENT: usize = 50;

fn report(elapsed: Duration) -> String {
    format!("Einsum takes: {:.6} s", elapsed.as_secs_f64())
}

fn main() -> Result<(), TensorError> {
    let shape = [EXTENT; 4];
    let lhs: Tensor<i64> = Tensor::from_fn(&shape, |ix| (ix[0] + ix[1] + ix[2] + ix[3]) as i64);
    let rhs: Tensor<i64> = Tensor::from_fn(&shape, |ix| (ix[0] * ix[1] * ix[2] * ix[3]) as i64);

    let start = Instant::now();
    let result = einsum("ijpq,pqrs->ijrs", &lhs, &rhs)?;
    let elapsed = start.elapsed();
    black_box(result);

    println!("{}", report(elapsed));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_has_six_fraction_digits() {
        assert_eq!(
            report(Duration::from_micros(2_341_567)),
            "Einsum takes: 2.341567 s"
        );
        assert_eq!(report(Duration::ZERO), "Einsum takes: 0.000000 s");
    }

    #[test]
    fn test_report_rounds_sub_microsecond_durations() {
        assert_eq!(
            report(Duration::from_nanos(1_499)),
            "Einsum takes: 0.000001 s"
        );
    }
}
