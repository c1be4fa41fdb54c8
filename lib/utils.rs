//! Miscellaneous tools.
//!
//! All norms here use the plain rectangle rule, `Σ |q[k]|² dx`, with no
//! endpoint weighting.

use ndarray::{ self as nd, Ix1 };
use crate::complex::ComplexSeq;

/// Calculate the norm of a real wavefunction.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    q.iter().map(|qk| qk * qk).sum::<f64>() * dx
}

/// Calculate the norm of a complex wavefunction.
pub fn seq_norm(q: &ComplexSeq, dx: f64) -> f64 {
    wf_norm(q.re(), dx) + wf_norm(q.im(), dx)
}

// square root of the norm, substituting 1 for an exactly vanishing norm so that
// renormalization leaves an all-zero wavefunction untouched
fn norm_factor(norm: f64) -> f64 {
    if norm == 0.0 {
        tracing::warn!("renormalizing a wavefunction with zero norm");
        1.0
    } else {
        norm.sqrt()
    }
}

/// Renormalize a real wavefunction in place.
///
/// An all-zero wavefunction is left as-is.
pub fn wf_renormalize<S>(q: &mut nd::ArrayBase<S, Ix1>, dx: f64)
where S: nd::DataMut<Elem = f64>
{
    let norm = norm_factor(wf_norm(q, dx));
    q.iter_mut().for_each(|qk| { *qk /= norm; });
}

/// Renormalize a complex wavefunction in place.
///
/// An all-zero wavefunction is left as-is.
pub fn seq_renormalize(q: &mut ComplexSeq, dx: f64) {
    let norm = norm_factor(seq_norm(q, dx));
    q.scale(norm.recip());
}

/// Return a normalized copy of a complex wavefunction.
pub fn seq_normalized(q: &ComplexSeq, dx: f64) -> ComplexSeq {
    let mut new = q.clone();
    seq_renormalize(&mut new, dx);
    new
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::C64;

    #[test]
    fn rectangle_rule_norm() {
        let q = nd::array![1.0, 2.0, 2.0];
        assert!((wf_norm(&q, 0.5) - 4.5).abs() < 1e-15);
    }

    #[test]
    fn renormalize_real() {
        let mut q = nd::array![3.0, 4.0];
        wf_renormalize(&mut q, 0.25);
        assert!((wf_norm(&q, 0.25) - 1.0).abs() < 1e-14);
    }

    #[test]
    fn zero_norm_is_untouched() {
        let mut q: nd::Array1<f64> = nd::Array1::zeros(5);
        wf_renormalize(&mut q, 0.1);
        assert!(q.iter().all(|qk| *qk == 0.0));

        let z = seq_normalized(&ComplexSeq::zeros(3), 0.1);
        assert!(z.iter().all(|zk| zk == C64::new(0.0, 0.0)));
    }

    #[test]
    fn renormalize_complex() {
        let q: ComplexSeq
            = [C64::new(1.0, 1.0), C64::new(0.0, -2.0), C64::new(0.5, 0.0)]
            .into_iter()
            .collect();
        let n = seq_normalized(&q, 0.2);
        assert!((seq_norm(&n, 0.2) - 1.0).abs() < 1e-14);
        // phases are preserved
        assert!((n.at(0).arg() - q.at(0).arg()).abs() < 1e-14);
    }
}
