//! Stationary wavefunctions: construction from raw Numerov integrations,
//! discontinuity-cancelling combination of parity solutions, and conversion to
//! the momentum representation.

use ndarray as nd;
use crate::{
    DEF_NEGLIGIBLE_JUMP,
    DEF_SIGN_EPSILON,
    classical::TurningPoints,
    complex::{ C64, ComplexSeq, exponential },
    error::{ LengthError, XError, XResult },
    fourier,
    numerov::NumerovSolution,
    utils::{ seq_norm, seq_renormalize, wf_renormalize },
};

/// Descriptive data attached to a [`Wavefunction`].
///
/// All numeric fields are checked to be finite when a `Wavefunction` is
/// constructed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Metadata {
    /// Energy
    pub energy: f64,
    /// Classical turning points at which the wavefunction was matched.
    pub turning_points: TurningPoints,
    /// Derivative discontinuity at the left turning point.
    pub left_discontinuity: f64,
    /// Derivative discontinuity at the right turning point.
    pub right_discontinuity: f64,
}

impl Metadata {
    fn check(&self, n: usize) -> XResult<()> {
        XError::check_finite("energy", self.energy)?;
        XError::check_finite("left discontinuity", self.left_discontinuity)?;
        XError::check_finite("right discontinuity", self.right_discontinuity)?;
        let TurningPoints { left, right } = self.turning_points;
        XError::check_turning_points(left, right, n)?;
        Ok(())
    }
}

/// Overrides for the thresholds used when combining parity solutions.
///
/// Unset fields fall back to crate defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tolerances {
    /// Magnitude below which a derivative discontinuity is considered
    /// negligible (default: `0.01`).
    pub negligible_jump: Option<f64>,
    /// Magnitude below which a sample is skipped when fixing the overall sign
    /// of a combined solution (default: `1e-16`).
    pub sign_epsilon: Option<f64>,
}

impl Tolerances {
    fn negligible_jump(&self) -> XResult<f64> {
        let tol = self.negligible_jump.unwrap_or(DEF_NEGLIGIBLE_JUMP);
        XError::check_tolerance(tol)?;
        Ok(tol)
    }

    fn sign_epsilon(&self) -> XResult<f64> {
        let tol = self.sign_epsilon.unwrap_or(DEF_SIGN_EPSILON);
        XError::check_tolerance(tol)?;
        Ok(tol)
    }
}

/// A single, immutable stationary state sampled over a uniform mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Wavefunction {
    values: ComplexSeq,
    dx: f64,
    meta: Metadata,
}

impl Wavefunction {
    /// Create a new wavefunction from its samples, grid spacing, and metadata.
    ///
    /// Fails if `dx` or any numeric metadata field is non-finite, or if the
    /// turning points do not lie within the mesh.
    pub fn new(values: ComplexSeq, dx: f64, meta: Metadata) -> XResult<Self> {
        XError::check_finite("dx", dx)?;
        meta.check(values.len())?;
        Ok(Self { values, dx, meta })
    }

    /// Match a raw Numerov integration at the given turning points.
    ///
    /// Inside `[left, right)` the outward-integrated values are used; outside,
    /// the inward-integrated values are rescaled to agree with them at the
    /// turning points. The result is normalized so that `Σ |ψ|² dx = 1` (an
    /// identically zero result is left as-is), and the derivative
    /// discontinuity
    /// ```text
    /// (ψ[k + 1] + ψ[k - 1] - (14 - 12 F[k]) ψ[k]) / dx
    /// ```
    /// is recorded at both turning points, taken as zero at the edges of the
    /// mesh.
    ///
    /// Fails if `left > right`, `right` lies outside the mesh, or matching
    /// produces non-finite values.
    pub fn resolve(raw: &NumerovSolution, tp: TurningPoints) -> XResult<Self> {
        let n = raw.len();
        let dx = raw.dx();
        let start = raw.start();
        let TurningPoints { left, right } = tp;
        XError::check_turning_points(left, right, n)?;

        let outward = raw.outward();
        let edge_l = |k: usize| {
            if k <= start {
                raw.inward_from_left(k)
            } else {
                raw.inward_from_right(k)
            }
        };
        let edge_r = |k: usize| raw.inward(k);
        let left_scale = outward[left] / edge_l(left);
        let right_scale = outward[right] / edge_r(right);

        let mut psi: nd::Array1<f64>
            = (0..n)
            .map(|k| {
                if k < left {
                    edge_l(k) * left_scale
                } else if k < right {
                    outward[k]
                } else {
                    edge_r(k) * right_scale
                }
            })
            .collect();
        wf_renormalize(&mut psi, dx);

        let F = raw.F();
        let jump = |k: usize| {
            if k == 0 || k == n - 1 {
                0.0
            } else {
                (psi[k + 1] + psi[k - 1] - (14.0 - 12.0 * F[k]) * psi[k]) / dx
            }
        };
        let meta = Metadata {
            energy: raw.energy(),
            turning_points: tp,
            left_discontinuity: jump(left),
            right_discontinuity: jump(right),
        };
        tracing::debug!(
            energy = meta.energy,
            parity = ?raw.parity(),
            left,
            right,
            left_discontinuity = meta.left_discontinuity,
            right_discontinuity = meta.right_discontinuity,
            "resolved wavefunction"
        );
        Self::new(ComplexSeq::from_real(psi), dx, meta)
    }

    /// Get a reference to the samples.
    pub fn values(&self) -> &ComplexSeq { &self.values }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get a reference to the metadata.
    pub fn metadata(&self) -> &Metadata { &self.meta }

    /// Get the energy.
    pub fn energy(&self) -> f64 { self.meta.energy }

    /// Get the number of samples.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.values.len() }

    /// Get the value of the time-evolved state, `ψ[index] exp(-i E t)`.
    ///
    /// *Panics if `index` is out of bounds*.
    pub fn value_at(&self, index: usize, time: f64) -> C64 {
        self.values.at(index) * exponential(-self.meta.energy * time)
    }

    /// Sample the time-evolved state over the whole mesh.
    pub fn sample(&self, time: f64) -> ComplexSeq {
        self.values.mul_all(exponential(-self.meta.energy * time))
    }

    /// Get the probability density `|ψ|²`.
    pub fn density(&self) -> nd::Array1<f64> { self.values.norm_sqr() }

    /// Calculate the norm `Σ |ψ|² dx`.
    pub fn norm(&self) -> f64 { seq_norm(&self.values, self.dx) }

    /// Count the nodes of the real part within the classically allowed region.
    ///
    /// Exact zeros are skipped over, so that a node falling on a sample is
    /// counted once.
    pub fn node_count(&self) -> usize {
        let TurningPoints { left, right } = self.meta.turning_points;
        let re = self.values.re();
        let mut last: Option<bool> = None;
        let mut count: usize = 0;
        for &qk in re.iter().skip(left).take(right - left + 1) {
            if qk == 0.0 { continue; }
            let sign = qk > 0.0;
            if last.is_some_and(|s| s != sign) { count += 1; }
            last = Some(sign);
        }
        count
    }

    /// Convert to the momentum representation.
    ///
    /// The transform is taken about sample `center`, with output samples spaced
    /// by `dx * scale`, and renormalized with the grid spacing of `self`. The
    /// metadata is carried over unchanged.
    pub fn fourier_transform(&self, center: usize, scale: f64) -> Self {
        let dfreq = self.dx * scale;
        let mut values
            = fourier::fourier_transform(&self.values, self.dx, center, dfreq);
        seq_renormalize(&mut values, self.dx);
        Self { values, dx: self.dx, meta: self.meta }
    }

    /// Like [`Self::fourier_transform`], but using
    /// [`fourier::fourier_transform_naive`].
    pub fn fourier_transform_naive(&self, center: usize, scale: f64) -> Self {
        let dfreq = self.dx * scale;
        let mut values
            = fourier::fourier_transform_naive(
                &self.values, self.dx, center, dfreq);
        seq_renormalize(&mut values, self.dx);
        Self { values, dx: self.dx, meta: self.meta }
    }
}

/// Combine two solutions resolved at the same turning points so as to cancel
/// the derivative discontinuity at the left turning point.
///
/// If either solution already has a negligible left discontinuity
/// (`|jump| < 0.01`), it is returned unchanged, checking `first` before
/// `second`. Otherwise the combination `first + k * second` with
/// `k = -jump₁ / jump₂` is formed and renormalized, and its overall sign is
/// fixed so that the first non-negligible sample at or to the right of the left
/// turning point is positive. The result carries the energy and turning points
/// of `first` and zero discontinuities. The discontinuity at the right turning
/// point is not addressed.
///
/// Fails if the two solutions differ in length, grid spacing, or turning
/// points.
pub fn average(first: &Wavefunction, second: &Wavefunction)
    -> XResult<Wavefunction>
{
    average_with(first, second, &Tolerances::default())
}

/// Like [`average`], but with custom thresholds.
pub fn average_with(
    first: &Wavefunction,
    second: &Wavefunction,
    tols: &Tolerances,
) -> XResult<Wavefunction>
{
    LengthError::check_len(first.len(), second.len())?;
    if first.dx != second.dx {
        return Err(XError::MismatchedSpacing(first.dx, second.dx));
    }
    let tp1 = first.meta.turning_points;
    let tp2 = second.meta.turning_points;
    if tp1 != tp2 {
        return Err(XError::MismatchedTurningPoints(
            tp1.left, tp1.right, tp2.left, tp2.right));
    }
    let negligible = tols.negligible_jump()?;
    let sign_epsilon = tols.sign_epsilon()?;

    let bad1 = first.meta.left_discontinuity;
    let bad2 = second.meta.left_discontinuity;
    if bad1.abs() < negligible {
        tracing::debug!(discontinuity = bad1, "first solution is smooth");
        return Ok(first.clone());
    }
    if bad2.abs() < negligible {
        tracing::debug!(discontinuity = bad2, "second solution is smooth");
        return Ok(second.clone());
    }

    let k = -bad1 / bad2;
    tracing::debug!(k, "combining solutions");
    let mut values = first.values.add_scaled(C64::from(k), &second.values)?;
    seq_renormalize(&mut values, first.dx);
    let leading
        = values.re().iter().skip(tp1.left)
        .find(|qk| qk.abs() > sign_epsilon)
        .copied();
    if leading.is_some_and(|qk| qk < 0.0) { values.negate(); }

    let meta = Metadata {
        left_discontinuity: 0.0,
        right_discontinuity: 0.0,
        ..first.meta
    };
    Wavefunction::new(values, first.dx, meta)
}
