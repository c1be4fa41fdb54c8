//! Equally weighted superpositions of stationary states.

use ndarray as nd;
use num_traits::Zero;
use crate::{
    complex::{ C64, ComplexSeq },
    error::{ LengthError, XError, XResult },
    wavefunction::Wavefunction,
};

/// An immutable, equally weighted superposition of one or more
/// [`Wavefunction`]s sharing a mesh.
///
/// The state at time `t` is
/// ```text
///          1
/// Ψ[k] = ---- Σ ψₙ[k] exp(-i Eₙ t)
///         Nₑ  n
/// ```
/// To change the set of energies, build a new superposition.
#[derive(Clone, Debug, PartialEq)]
pub struct Superposition {
    components: Vec<Wavefunction>,
}

impl Superposition {
    /// Create a new superposition.
    ///
    /// Fails if `components` is empty or its elements differ in length or grid
    /// spacing.
    pub fn new(components: Vec<Wavefunction>) -> XResult<Self> {
        let first = components.first().ok_or(XError::EmptySuperposition)?;
        for wf in components.iter().skip(1) {
            LengthError::check_len(first.len(), wf.len())?;
            if wf.dx() != first.dx() {
                return Err(XError::MismatchedSpacing(first.dx(), wf.dx()));
            }
        }
        Ok(Self { components })
    }

    /// Get a reference to all components.
    pub fn components(&self) -> &[Wavefunction] { &self.components }

    /// Get the number of components.
    pub fn num_components(&self) -> usize { self.components.len() }

    /// Get the number of samples in each component.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.components[0].len() }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.components[0].dx() }

    /// Get the energies of all components.
    pub fn energies(&self) -> Vec<f64> {
        self.components.iter().map(|wf| wf.energy()).collect()
    }

    /// Get the value of the superposition at sample `index` and time `time`.
    ///
    /// *Panics if `index` is out of bounds*.
    pub fn value_at(&self, index: usize, time: f64) -> C64 {
        let n = self.components.len() as f64;
        self.components.iter()
            .map(|wf| wf.value_at(index, time))
            .fold(C64::zero(), |acc, z| acc + z)
            / n
    }

    /// Sample the superposition over the whole mesh at time `time`.
    pub fn sample(&self, time: f64) -> ComplexSeq {
        (0..self.len()).map(|k| self.value_at(k, time)).collect()
    }

    /// Get the probability density `|Ψ|²` at time `time`.
    pub fn density_at(&self, time: f64) -> nd::Array1<f64> {
        self.sample(time).norm_sqr()
    }

    /// Convert every component to the momentum representation.
    ///
    /// See [`Wavefunction::fourier_transform`].
    pub fn fourier_transform(&self, center: usize, scale: f64) -> Self {
        let components
            = self.components.iter()
            .map(|wf| wf.fourier_transform(center, scale))
            .collect();
        Self { components }
    }
}
