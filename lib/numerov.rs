//! Two-sided Numerov integration of the time-independent Schrödinger equation
//! at a fixed (arbitrary) energy.
//!
//! Integration starts at the minimum of the potential and is carried out in
//! two ways:
//! - *outward*, from the minimum to both edges of the mesh, under an even or
//!   odd parity ansatz about the starting point;
//! - *inward*, from both edges to the minimum, assuming that the wavefunction
//!   vanishes just outside the mesh.
//!
//! The raw results are matched and normalized by
//! [`Wavefunction::resolve`][crate::wavefunction::Wavefunction::resolve].

use ndarray as nd;
use crate::{ Arr1, error::{ XError, XResult } };

/// Parity ansatz about the starting point of outward integration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parity {
    /// `ψ(start) = 1` with vanishing slope.
    Even,
    /// `ψ(start) = 0` with non-zero slope.
    Odd,
}

impl Parity {
    /// Return `true` if `self` is `Even`.
    pub fn is_even(&self) -> bool { matches!(self, Self::Even) }

    /// Return `true` if `self` is `Odd`.
    pub fn is_odd(&self) -> bool { matches!(self, Self::Odd) }

    // sign of the left-edge seed relative to the right-edge seed
    fn edge_sign(&self) -> f64 {
        match self {
            Self::Even => 1.0,
            Self::Odd => -1.0,
        }
    }
}

/// Validated input to a Numerov integration: a potential mesh of at least 3
/// samples covering a domain of width `max_x`, and a finite energy.
#[derive(Clone, Debug)]
pub struct NumerovInput<'a> {
    V: nd::ArrayView1<'a, f64>,
    E: f64,
    max_x: f64,
}

impl<'a> NumerovInput<'a> {
    /// Create a new input.
    ///
    /// Fails if `V` has fewer than 3 samples or any non-finite sample, `max_x`
    /// is not positive and finite, or `E` is not finite.
    pub fn new<S>(V: &'a Arr1<S>, E: f64, max_x: f64) -> XResult<Self>
    where S: nd::Data<Elem = f64>
    {
        XError::check_mesh(V.len())?;
        V.iter().try_for_each(|&Vk| XError::check_finite("potential", Vk))?;
        XError::check_domain(max_x)?;
        XError::check_finite("energy", E)?;
        Ok(Self { V: V.view(), E, max_x })
    }

    /// Get a view of the potential mesh.
    pub fn potential(&self) -> nd::ArrayView1<'a, f64> { self.V.clone() }

    /// Get the energy.
    pub fn energy(&self) -> f64 { self.E }

    /// Get the width of the spatial domain.
    pub fn max_x(&self) -> f64 { self.max_x }

    /// Get the number of mesh points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.V.len() }

    /// Get the grid spacing, `max_x / N`.
    pub fn dx(&self) -> f64 { self.max_x / self.V.len() as f64 }

    /// Integrate under the given parity ansatz.
    pub fn integrate(&self, parity: Parity) -> NumerovSolution {
        let dx = self.dx();
        let F = numerov_f(&self.V, self.E, dx);
        let start = index_of_minimum(&self.V);
        tracing::debug!(energy = self.E, start, ?parity, "numerov integration");
        let outward = values_from_center(&F, dx, start, parity);
        let (inward_left, inward_right)
            = values_from_edge(&F, dx, start, parity);
        NumerovSolution {
            outward,
            inward_left,
            inward_right,
            F,
            dx,
            E: self.E,
            start,
            parity,
        }
    }
}

/// Compute the Numerov weight `F = 1 - (dx² / 12) * 2 * (V - E)` at every mesh
/// point.
pub fn numerov_f<S>(V: &Arr1<S>, E: f64, dx: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let ddx12 = dx.powi(2) / 12.0;
    V.mapv(|Vk| 1.0 - ddx12 * 2.0 * (Vk - E))
}

/// Return the index of the minimum of `V`.
///
/// If several samples share the minimum value, the middle one among them is
/// chosen. The result is clamped to `[1, N - 2]` so that integration always has
/// room to step in both directions.
///
/// *Panics if `V` has length less than 3*.
pub fn index_of_minimum<S>(V: &Arr1<S>) -> usize
where S: nd::Data<Elem = f64>
{
    let n = V.len();
    let Vmin = V.iter().copied().fold(f64::INFINITY, f64::min);
    let ties: Vec<usize>
        = V.iter().enumerate()
        .filter(|(_, Vk)| **Vk == Vmin)
        .map(|(k, _)| k)
        .collect();
    let k = ties.get(ties.len() / 2).copied().unwrap_or(n / 2);
    k.clamp(1, n - 2)
}

// sweeps through classically forbidden regions grow exponentially; this is the
// magnitude at which they are cut off (outward) or rescaled (inward)
const SWEEP_LIMIT: f64 = 1e150;

// the Numerov recurrence, taking `prev1` to be the most recently set neighbor
// of `target` and `prev2` the one before it
fn numerov_step(
    F: &nd::Array1<f64>,
    q: &nd::Array1<f64>,
    target: usize,
    prev1: usize,
    prev2: usize,
) -> f64 {
    ((12.0 - 10.0 * F[prev1]) * q[prev1] - F[prev2] * q[prev2]) / F[target]
}

// outward integration over the whole mesh from `start`; in either direction,
// samples past the first one that would exceed `SWEEP_LIMIT` are left at zero
fn values_from_center(
    F: &nd::Array1<f64>,
    dx: f64,
    start: usize,
    parity: Parity,
) -> nd::Array1<f64> {
    let n = F.len();
    let mut q: nd::Array1<f64> = nd::Array1::zeros(n);
    match parity {
        Parity::Even => {
            q[start] = 1.0;
            // assume F and q symmetric about `start`
            q[start + 1] = 0.5 * (12.0 - 10.0 * F[start]) * q[start]
                / F[start + 1];
        },
        Parity::Odd => {
            q[start] = 0.0;
            q[start + 1] = dx;
        },
    }
    for k in start + 1..n - 1 {
        let next = numerov_step(F, &q, k + 1, k, k - 1);
        if next.abs() > SWEEP_LIMIT { break; }
        q[k + 1] = next;
    }
    for k in (1..=start).rev() {
        let next = numerov_step(F, &q, k - 1, k, k + 1);
        if next.abs() > SWEEP_LIMIT { break; }
        q[k - 1] = next;
    }
    q
}

// divide the filled part of a sweep by the magnitude of its newest sample once
// that sample has grown past `SWEEP_LIMIT`
fn rescale_sweep(mut filled: nd::ArrayViewMut1<f64>, newest: f64) {
    let a = newest.abs();
    if a > SWEEP_LIMIT { filled.mapv_inplace(|qk| qk / a); }
}

// inward integration from both edges to `start`, assuming q = 0 just outside the
// mesh; the left sweep is valid on [0, start], the right on [start, n - 1], each
// up to an overall positive factor
fn values_from_edge(
    F: &nd::Array1<f64>,
    dx: f64,
    start: usize,
    parity: Parity,
) -> (nd::Array1<f64>, nd::Array1<f64>) {
    let n = F.len();

    let mut ql: nd::Array1<f64> = nd::Array1::zeros(n);
    ql[0] = parity.edge_sign() * dx;
    ql[1] = (12.0 - 10.0 * F[0]) * ql[0] / F[1];
    for k in 1..start {
        ql[k + 1] = numerov_step(F, &ql, k + 1, k, k - 1);
        let newest = ql[k + 1];
        rescale_sweep(ql.slice_mut(nd::s![..=k + 1]), newest);
    }

    let mut qr: nd::Array1<f64> = nd::Array1::zeros(n);
    qr[n - 1] = dx;
    qr[n - 2] = (12.0 - 10.0 * F[n - 1]) * qr[n - 1] / F[n - 2];
    for k in (start + 1..n - 1).rev() {
        qr[k - 1] = numerov_step(F, &qr, k - 1, k, k + 1);
        let newest = qr[k - 1];
        rescale_sweep(qr.slice_mut(nd::s![k - 1..]), newest);
    }

    (ql, qr)
}

/// Raw result of a Numerov integration, before matching and normalization.
///
/// Deep inside a classically forbidden region, the outward values are zero
/// wherever they would have exceeded `1e150`, and each inward sweep is known
/// only up to an overall positive factor. Neither affects matching, which uses
/// outward values between the turning points and ratios of inward values.
#[derive(Clone, Debug)]
pub struct NumerovSolution {
    outward: nd::Array1<f64>,
    inward_left: nd::Array1<f64>,
    inward_right: nd::Array1<f64>,
    F: nd::Array1<f64>,
    dx: f64,
    E: f64,
    start: usize,
    parity: Parity,
}

impl NumerovSolution {
    /// Get the outward-integrated values over the whole mesh.
    pub fn outward(&self) -> &nd::Array1<f64> { &self.outward }

    /// Get the inward-integrated value at index `k`: from the left-edge sweep
    /// for `k < start`, and from the right-edge sweep otherwise.
    ///
    /// *Panics if `k` is out of bounds*.
    pub fn inward(&self, k: usize) -> f64 {
        if k < self.start { self.inward_left[k] } else { self.inward_right[k] }
    }

    /// Get the inward-integrated value at index `k` from the left-edge sweep,
    /// valid for `k <= start`.
    ///
    /// *Panics if `k` is out of bounds*.
    pub fn inward_from_left(&self, k: usize) -> f64 { self.inward_left[k] }

    /// Get the inward-integrated value at index `k` from the right-edge sweep,
    /// valid for `k >= start`.
    ///
    /// *Panics if `k` is out of bounds*.
    pub fn inward_from_right(&self, k: usize) -> f64 { self.inward_right[k] }

    /// Get the Numerov weights.
    pub fn F(&self) -> &nd::Array1<f64> { &self.F }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the energy.
    pub fn energy(&self) -> f64 { self.E }

    /// Get the index at which outward integration started.
    pub fn start(&self) -> usize { self.start }

    /// Get the parity ansatz.
    pub fn parity(&self) -> Parity { self.parity }

    /// Get the number of mesh points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.F.len() }
}
