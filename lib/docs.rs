//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Shooting at fixed energy](#shooting-at-fixed-energy)
//! - [Cancelling the discontinuity](#cancelling-the-discontinuity)
//! - [Momentum representation](#momentum-representation)
//! - [Time dependence](#time-dependence)
//!
//! # Background
//! All functions in this crate work with the time-independent Schrödinger
//! equation (TISE) in natural units with *ħ* = *m* = 1,
//! ```text
//!   1 ∂²ψ
//! - - --- + V(x) ψ(x) = E ψ(x)
//!   2 ∂x²
//! ```
//! which is of the form *ψ*'' = *Q*(*x*) *ψ* with *Q*(*x*) = 2 (*V*(*x*) - *E*).
//! Assuming a discretization over *N* points spanning a domain of width
//! *X*<sub>max</sub>,
//! ```text
//! δx = X_max / N
//! ψ[i] = ψ(x[i]), i ∊ {0, ..., N - 1}
//! ```
//! Numerov's method[^1] is a three-point scheme with an *O*(*δx*⁶) error term:
//! ```text
//! F[i] = 1 - (δx² / 12) 2 (V[i] - E)
//!
//!            (12 - 10 F[i]) ψ[i] - F[i - 1] ψ[i - 1]
//! ψ[i + 1] = ---------------------------------------
//!                           F[i + 1]
//! ```
//! The same relation read with the indices mirrored integrates leftward.
//!
//! # Shooting at fixed energy
//! For an arbitrary energy *E* there is in general no solution of the TISE that
//! is both smooth everywhere and square-integrable; these exist only at the
//! eigenvalues. The approach taken here is to construct, for any given *E*, the
//! best approximately smooth solution available from two-sided shooting[^2]:
//!
//! 1. Integrate *outward* from the minimum of the potential, where the
//!    wavefunction is oscillatory, toward both edges. The first two points are
//!    fixed by a parity ansatz about the starting point *s*:
//!    ```text
//!    even:  ψ[s] = 1,  ψ[s + 1] = (12 - 10 F[s]) ψ[s] / (2 F[s + 1])
//!    odd:   ψ[s] = 0,  ψ[s + 1] = δx
//!    ```
//!    where the even case follows from assuming *ψ*\[*s* - 1\] = *ψ*\[*s* + 1\].
//! 2. Integrate *inward* from both edges toward the minimum, assuming that the
//!    wavefunction vanishes just outside the mesh (*ψ*\[-1\] = *ψ*\[*N*\] = 0).
//!    Inward integration through a classically forbidden region follows the
//!    solution that decays toward the edge, which outward integration cannot
//!    do stably.
//! 3. Between the classical turning points, where *E* > *V*, keep the outward
//!    solution; outside of them, keep the inward solutions, rescaled to agree
//!    with the outward solution at the turning points.
//!
//! The composite is continuous by construction, but its first derivative jumps
//! at the turning points unless *E* is an eigenvalue. The size of the jump at
//! turning point *k* is measured as
//! ```text
//!      ψ[k + 1] + ψ[k - 1] - (14 - 12 F[k]) ψ[k]
//! Δ = -----------------------------------------
//!                       δx
//! ```
//! which vanishes (to *O*(*δx*³)) if all three points satisfy the same Numerov
//! relation, and otherwise approximates *ψ*'(*x*<sub>k</sub>⁺) -
//! *ψ*'(*x*<sub>k</sub>⁻).
//!
//! # Cancelling the discontinuity
//! Since the measured jump is linear in the samples, two composites ψ₁ and ψ₂
//! matched at the same turning points with jumps Δ₁ and Δ₂ at the left
//! turning point combine as
//! ```text
//! ψ = ψ₁ - (Δ₁ / Δ₂) ψ₂
//! ```
//! to give a wavefunction that is smooth at the left turning point. The even
//! and odd composites are used for ψ₁ and ψ₂. For a symmetric potential at an
//! eigenvalue, one of the two already has a negligible jump and is used as-is.
//! The jump at the right turning point is left alone.
//!
//! # Momentum representation
//! The momentum-space wavefunction is
//! ```text
//!           1
//! φ(p) = ------- ∫ dx exp(-i p x) ψ(x)
//!        √(2 π)
//! ```
//! which is approximated as a Riemann sum over the samples. Momenta are sampled
//! at arbitrary multiples of a chosen spacing rather than at the harmonics of
//! the domain width, so a fast Fourier transform is of no use. Instead, the
//! phase factor along each row of the sum is generated by repeated
//! multiplication,
//! ```text
//! exp(-i p x[k + 1]) = exp(-i p x[k]) exp(-i p δx)
//! ```
//! which costs one complex multiplication per term in place of a pair of
//! trigonometric evaluations.
//!
//! # Time dependence
//! A stationary state of energy *E* evolves by a global phase,
//! *ψ*(*x*, *t*) = *ψ*(*x*) exp(-*i* *E* *t*). A superposition of
//! stationary states at energies *E*<sub>n</sub> therefore evolves as
//! ```text
//!              1
//! Ψ(x, t) = ---- Σ ψₙ(x) exp(-i Eₙ t)
//!            Nₑ  n
//! ```
//! with no time stepping required. Because the Fourier transform is linear,
//! the momentum-space superposition is the superposition of the transformed
//! components.
//!
//! [^1]: B. Numerov, "Note on the numerical integration of d2x/dt2 = f(x,t)."
//! Astronomische Nachrichten **230** 19 (1927).
//!
//! [^2]: P. Giannozzi, "Numerical Methods in Quantum Mechanics," lecture notes,
//! University of Udine, ch. 1 (2019).
