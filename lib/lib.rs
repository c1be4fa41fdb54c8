#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for the numerical solution
//! of the one-dimensional, time-independent Schrödinger equation at arbitrary
//! (not necessarily eigen-) energies via two-sided Numerov shooting, and for
//! conversion of the resulting wavefunctions between position and momentum
//! representations.
//!
//! Provides implementations for the following numerical routines:
//! - Time-independent:
//!     - Outward/inward Numerov integration from the potential minimum with
//!       even/odd parity ansätze
//!     - Matching at classical turning points, normalization, and measurement
//!       of the residual derivative discontinuity
//!     - Discontinuity-cancelling combination of the two parity solutions
//! - Representation changes:
//!     - Direct (non-FFT) continuous Fourier transform, in naive and
//!       rotor-stepped forms
//! - Time dependence:
//!     - Equally weighted superpositions of stationary states
//!
//! ```
//! use qwell::solve::System;
//!
//! // harmonic well, ħ = m = ω = 1
//! let system = System::from_fn(1025, 20.0, |x| 0.5 * x * x).unwrap();
//! let wf = system.solve(2.5).unwrap();
//! assert!((wf.norm() - 1.0).abs() < 1e-6);
//! assert!(wf.metadata().left_discontinuity.abs() < 0.01);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod complex;
pub mod utils;
pub mod classical;
pub mod numerov;
pub mod wavefunction;
pub mod fourier;
pub mod superposition;
pub mod solve;

pub mod docs;

/// Magnitude below which a sample's real part is ignored when fixing the
/// overall sign of an averaged wavefunction.
pub(crate) const DEF_SIGN_EPSILON: f64 = 1e-16;
/// Derivative discontinuity below which a parity solution is taken as-is by
/// the averaging step.
pub(crate) const DEF_NEGLIGIBLE_JUMP: f64 = 0.01;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;

pub use complex::{ C64, ComplexSeq };
pub use wavefunction::{ Metadata, Wavefunction };
pub use superposition::Superposition;
