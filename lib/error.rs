//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every error here signals a violated precondition on the caller's side;
//! numerically degenerate but valid inputs (zero norms, negligible
//! discontinuities, turning points on the mesh edges) are handled without
//! error.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        Self::check_len(a.len(), b.len())
    }

    pub(crate) fn check_len(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

pub type XResult<T> = Result<T, XError>;

/// Returned from wavefunction construction and solver functions.
#[derive(Debug, Error)]
pub enum XError {
    /// Returned when a potential mesh has fewer than 3 samples.
    #[error("potential mesh must have at least 3 samples; got {0}")]
    MeshTooShort(usize),

    /// Returned when the spatial domain width is non-positive or non-finite.
    #[error("domain width must be positive and finite; got {0}")]
    BadDomain(f64),

    /// Returned when a quantity that must be finite is not.
    #[error("{field} must be finite; got {value}")]
    NonFinite {
        /// Name of the offending quantity.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Returned when turning points do not satisfy `left <= right < n`.
    #[error("turning points must satisfy 0 <= left <= right < {n}; got left = {left}, right = {right}")]
    BadTurningPoints {
        left: usize,
        right: usize,
        n: usize,
    },

    /// Returned when two wavefunctions to be combined were resolved at
    /// different turning points.
    #[error("wavefunctions were resolved at different turning points: ({0}, {1}) and ({2}, {3})")]
    MismatchedTurningPoints(usize, usize, usize, usize),

    /// Returned when the components of a superposition disagree on their grid
    /// spacing.
    #[error("superposition components must share a grid spacing; got {0} and {1}")]
    MismatchedSpacing(f64, f64),

    /// Returned when a superposition is built from no components.
    #[error("superposition must have at least one component")]
    EmptySuperposition,

    /// Returned when a tolerance override is negative or non-finite.
    #[error("tolerances must be finite and non-negative; got {0}")]
    BadTolerance(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl XError {
    pub(crate) fn check_mesh(n: usize) -> Result<(), Self> {
        (n >= 3).then_some(()).ok_or(Self::MeshTooShort(n))
    }

    pub(crate) fn check_domain(max_x: f64) -> Result<(), Self> {
        (max_x.is_finite() && max_x > 0.0)
            .then_some(()).ok_or(Self::BadDomain(max_x))
    }

    pub(crate) fn check_finite(field: &'static str, value: f64)
        -> Result<(), Self>
    {
        value.is_finite().then_some(()).ok_or(Self::NonFinite { field, value })
    }

    pub(crate) fn check_turning_points(left: usize, right: usize, n: usize)
        -> Result<(), Self>
    {
        (left <= right && right < n)
            .then_some(()).ok_or(Self::BadTurningPoints { left, right, n })
    }

    pub(crate) fn check_tolerance(tol: f64) -> Result<(), Self> {
        (tol.is_finite() && tol >= 0.0)
            .then_some(()).ok_or(Self::BadTolerance(tol))
    }
}
