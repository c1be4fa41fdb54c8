//! Direct evaluation of the continuous Fourier transform
//! ```text
//!           1
//! φ(p) = ------- ∫ dx exp(-i p x) ψ(x)
//!        √(2 π)
//! ```
//! as a Riemann sum over the sampled wavefunction.
//!
//! Sample `k` of the input sits at `x = (k - center) dx` and sample `j` of the
//! output at `p = (j - center) dfreq`. Since `dfreq` is arbitrary rather than a
//! multiple of `2π / (N dx)`, the sum cannot be factored into a fast Fourier
//! transform and costs *O*(*N*²) multiply-adds.
//!
//! Two implementations are provided that agree to within rounding:
//! ```
//! use ndarray as nd;
//! use qwell::{ ComplexSeq, fourier };
//!
//! let dx = 0.05;
//! let q = ComplexSeq::from_real(
//!     (0..201).map(|k| (-((k as f64 - 100.0) * dx).powi(2) / 2.0).exp())
//!         .collect::<nd::Array1<f64>>()
//! );
//! let fast = fourier::fourier_transform(&q, dx, 100, 0.05);
//! let slow = fourier::fourier_transform_naive(&q, dx, 100, 0.05);
//! assert!(
//!     fast.iter().zip(slow.iter())
//!         .all(|(a, b)| (a.re - b.re).abs() < 1e-4 && (a.im - b.im).abs() < 1e-4)
//! );
//! ```

use std::f64::consts::TAU;
use num_traits::Zero;
use crate::complex::{ C64, ComplexSeq, exponential };

/// Compute the transform by evaluating `exp(-i p x)` afresh for every pair of
/// input and output samples.
pub fn fourier_transform_naive(
    q: &ComplexSeq,
    dx: f64,
    center: usize,
    dfreq: f64,
) -> ComplexSeq
{
    let n = q.len();
    let c = center as f64;
    let pref = dx / TAU.sqrt();
    (0..n)
        .map(|j| {
            let p = (j as f64 - c) * dfreq;
            let acc: C64
                = q.iter().enumerate()
                .map(|(k, qk)| qk * exponential(-p * (k as f64 - c) * dx))
                .sum();
            acc * pref
        })
        .collect()
}

/// Compute the transform by stepping a unit rotor across each row of the sum.
///
/// For each output sample, the phase `exp(-i p x)` is evaluated once at the
/// leftmost input sample and then advanced by repeated multiplication with
/// `exp(-i p dx)`, replacing per-sample trigonometric evaluations with a
/// single complex multiplication.
pub fn fourier_transform(
    q: &ComplexSeq,
    dx: f64,
    center: usize,
    dfreq: f64,
) -> ComplexSeq
{
    let n = q.len();
    let c = center as f64;
    let x0 = -c * dx;
    let pref = dx / TAU.sqrt();
    (0..n)
        .map(|j| {
            let p = (j as f64 - c) * dfreq;
            let step = exponential(-p * dx);
            let mut rotor = exponential(-p * x0);
            let mut acc = C64::zero();
            for qk in q.iter() {
                acc += qk * rotor;
                rotor *= step;
            }
            acc * pref
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use ndarray as nd;
    use super::*;

    // normalized gaussian ground state, π^(-1/4) exp(-x² / 2)
    fn gaussian(n: usize, dx: f64, shift: f64) -> ComplexSeq {
        let c = (n / 2) as f64;
        ComplexSeq::from_real(
            (0..n)
                .map(|k| {
                    let x = (k as f64 - c) * dx - shift;
                    PI.powf(-0.25) * (-x * x / 2.0).exp()
                })
                .collect::<nd::Array1<f64>>()
        )
    }

    fn assert_close(a: &ComplexSeq, b: &ComplexSeq, tol: f64) {
        assert_eq!(a.len(), b.len());
        for (k, (ak, bk)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                (ak.re - bk.re).abs() < tol && (ak.im - bk.im).abs() < tol,
                "mismatch at {k}: {ak} vs {bk}"
            );
        }
    }

    #[test]
    fn naive_and_rotor_agree() {
        let q = gaussian(513, 0.04, 1.3);
        let fast = fourier_transform(&q, 0.04, 256, 0.03);
        let slow = fourier_transform_naive(&q, 0.04, 256, 0.03);
        assert_close(&fast, &slow, 1e-4);
    }

    #[test]
    fn naive_and_rotor_agree_complex_input() {
        let q: ComplexSeq
            = (0..300)
            .map(|k| C64::new((k as f64 * 0.1).sin(), (k as f64 * 0.07).cos()))
            .collect();
        let fast = fourier_transform(&q, 0.1, 37, 0.21);
        let slow = fourier_transform_naive(&q, 0.1, 37, 0.21);
        assert_close(&fast, &slow, 1e-4);
    }

    #[test]
    fn gaussian_maps_to_gaussian() {
        let dx = 0.04;
        let q = gaussian(513, dx, 0.0);
        let phi = fourier_transform(&q, dx, 256, dx);
        let expected = gaussian(513, dx, 0.0);
        assert_close(&phi, &expected, 1e-6);
    }

    #[test]
    fn shift_becomes_phase() {
        let dx = 0.04;
        let shift = 0.8;
        let q = gaussian(513, dx, shift);
        let phi = fourier_transform(&q, dx, 256, dx);
        // |φ| is unchanged by a translation; the phase winds as exp(-i p x₀)
        let expected = gaussian(513, dx, 0.0);
        for j in (0..513).step_by(16) {
            assert!((phi.at(j).norm() - expected.at(j).re).abs() < 1e-6);
            let p = (j as f64 - 256.0) * dx;
            let phase = exponential(-p * shift) * expected.at(j).re;
            assert!((phi.at(j) - phase).norm() < 1e-6);
        }
    }
}
