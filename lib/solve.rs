//! High-level entry points computing approximate stationary states of the
//! one-dimensional, time-independent Schrödinger equation (TISE) at given
//! energies.
//!
//! For each energy, the potential is integrated under both parity ansätze, both
//! raw results are matched at a single, shared pair of classical turning
//! points, and the two matched solutions are combined to cancel the derivative
//! discontinuity at the left turning point. The energy is not adjusted, so the
//! result is only a true eigenstate if the energy is (close to) an eigenvalue.

use ndarray as nd;
use crate::{
    Arr1,
    classical::{ TurningPoints, classical_density, classical_turning_points },
    error::{ XError, XResult },
    numerov::{ NumerovInput, Parity },
    superposition::Superposition,
    wavefunction::{ Tolerances, Wavefunction, average_with },
};

/// Compute the approximate stationary state at energy `E` for a potential `V`
/// sampled over a domain of width `max_x`.
///
/// Fails if `V` has fewer than 3 samples, `max_x` is not positive and finite,
/// `E` is not finite, or matching produces non-finite values.
pub fn solve_stationary<S>(V: &Arr1<S>, E: f64, max_x: f64)
    -> XResult<Wavefunction>
where S: nd::Data<Elem = f64>
{
    solve_stationary_with(V, E, max_x, &Tolerances::default())
}

/// Like [`solve_stationary`], but with custom thresholds for combining parity
/// solutions.
pub fn solve_stationary_with<S>(
    V: &Arr1<S>,
    E: f64,
    max_x: f64,
    tols: &Tolerances,
) -> XResult<Wavefunction>
where S: nd::Data<Elem = f64>
{
    let input = NumerovInput::new(V, E, max_x)?;
    let tp: TurningPoints = classical_turning_points(V, E);
    let even = Wavefunction::resolve(&input.integrate(Parity::Even), tp)?;
    let odd = Wavefunction::resolve(&input.integrate(Parity::Odd), tp)?;
    average_with(&even, &odd, tols)
}

/// Compute the equally weighted superposition of approximate stationary states
/// at each of the energies `E`.
///
/// Fails if `E` is empty or any single solution fails.
pub fn solve_superposition<S>(V: &Arr1<S>, E: &[f64], max_x: f64)
    -> XResult<Superposition>
where S: nd::Data<Elem = f64>
{
    let components: Vec<Wavefunction>
        = E.iter()
        .map(|&e| solve_stationary(V, e, max_x))
        .collect::<XResult<_>>()?;
    Superposition::new(components)
}

/// Simple record to keep track of a potential mesh and the width of the domain
/// it covers.
///
/// The mesh is guaranteed to have at least 3 samples, and the domain width to
/// be positive and finite.
#[derive(Clone, Debug)]
pub struct System {
    // potential array
    V: nd::Array1<f64>,
    // domain width
    max_x: f64,
}

impl System {
    /// Create a new `System` by sampling a potential function at `n` points
    /// centered on the origin, `x[k] = (k - (n - 1) / 2) dx` with
    /// `dx = max_x / n`.
    ///
    /// Fails if `n < 3`, `max_x` is not positive and finite, or any sample of
    /// the potential is non-finite.
    pub fn from_fn<F>(n: usize, max_x: f64, mut V: F) -> XResult<Self>
    where F: FnMut(f64) -> f64
    {
        XError::check_mesh(n)?;
        XError::check_domain(max_x)?;
        let dx = max_x / n as f64;
        let c = (n - 1) as f64 / 2.0;
        let V: nd::Array1<f64>
            = (0..n).map(|k| V((k as f64 - c) * dx)).collect();
        Self::from_array(V, max_x)
    }

    /// Create a new `System` from a bare potential array.
    ///
    /// Fails if `V` has fewer than 3 samples, `max_x` is not positive and
    /// finite, or any sample of the potential is non-finite.
    pub fn from_array(V: nd::Array1<f64>, max_x: f64) -> XResult<Self> {
        XError::check_mesh(V.len())?;
        XError::check_domain(max_x)?;
        V.iter().try_for_each(|&Vk| XError::check_finite("potential", Vk))?;
        Ok(Self { V, max_x })
    }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get the width of the domain.
    pub fn get_max_x(&self) -> f64 { self.max_x }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.max_x / self.V.len() as f64 }

    /// Get the coordinates of the mesh points.
    pub fn get_x(&self) -> nd::Array1<f64> {
        let n = self.V.len();
        let dx = self.get_dx();
        let c = (n - 1) as f64 / 2.0;
        (0..n).map(|k| (k as f64 - c) * dx).collect()
    }

    /// Get the length of the potential array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.V.len() }

    /// Get the classical turning points at energy `E`.
    pub fn turning_points(&self, E: f64) -> TurningPoints {
        classical_turning_points(&self.V, E)
    }

    /// Get the classical probability density at energy `E`.
    pub fn classical_density(&self, E: f64) -> nd::Array1<f64> {
        classical_density(&self.V, E, self.get_dx())
    }

    /// Thin interface to [`solve_stationary`].
    pub fn solve(&self, E: f64) -> XResult<Wavefunction> {
        solve_stationary(&self.V, E, self.max_x)
    }

    /// Thin interface to [`solve_stationary_with`].
    pub fn solve_with(&self, E: f64, tols: &Tolerances)
        -> XResult<Wavefunction>
    {
        solve_stationary_with(&self.V, E, self.max_x, tols)
    }

    /// Thin interface to [`solve_superposition`].
    pub fn solve_many(&self, E: &[f64]) -> XResult<Superposition> {
        solve_superposition(&self.V, E, self.max_x)
    }
}
