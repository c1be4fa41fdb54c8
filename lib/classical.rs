//! Classical quantities for a particle of fixed energy in a potential: the
//! turning points bounding the classically allowed region and the classical
//! probability density.

use std::f64::consts::PI;
use ndarray as nd;
use crate::{ Arr1, error::{ XError, XResult } };

/// Mesh indices of the left and right classical turning points.
///
/// Always satisfies `left <= right`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurningPoints {
    /// Index of the first classically allowed sample.
    pub left: usize,
    /// Index of the last classically allowed sample.
    pub right: usize,
}

impl TurningPoints {
    /// Create a new pair of turning points, checking them against a mesh of
    /// length `n`.
    ///
    /// Fails if `left > right` or `right >= n`.
    pub fn new(left: usize, right: usize, n: usize) -> XResult<Self> {
        XError::check_turning_points(left, right, n)?;
        Ok(Self { left, right })
    }

    /// Turning points spanning the whole of a mesh of length `n`.
    ///
    /// *Panics if `n` is zero*.
    pub fn full(n: usize) -> Self { Self { left: 0, right: n - 1 } }

    /// Return `true` if `i` lies within `[left, right]`.
    pub fn contains(&self, i: usize) -> bool {
        (self.left..=self.right).contains(&i)
    }
}

/// Locate the classical turning points for energy `E`.
///
/// `left` is the first index from the left for which `E > V[left]`, and `right`
/// is the first such index from the right. If no sample of the potential lies
/// below `E`, the whole mesh is treated as allowed and `{0, N - 1}` is
/// returned, which is the same result as for an energy above the potential
/// everywhere.
///
/// *Panics if `V` is empty*.
pub fn classical_turning_points<S>(V: &Arr1<S>, E: f64) -> TurningPoints
where S: nd::Data<Elem = f64>
{
    let n = V.len();
    let Some(left) = V.iter().position(|&Vk| E > Vk) else {
        tracing::debug!(
            energy = E,
            "no classically allowed sample; using the full mesh"
        );
        return TurningPoints::full(n);
    };
    // the left scan guarantees a match no later than `left`
    let right
        = V.iter().enumerate().skip(left).rev()
        .find(|&(_, &Vk)| E > Vk)
        .map(|(k, _)| k)
        .unwrap_or(left);
    TurningPoints { left, right }
}

/// Compute the classical probability density for energy `E`.
///
/// Within the classically allowed region the density is proportional to the
/// inverse classical speed, `1 / (π √(2 (E - V)))`; it vanishes elsewhere. The
/// result is normalized so that `Σ p[k] dx = 1`, unless no sample is allowed,
/// in which case all zeros are returned.
pub fn classical_density<S>(V: &Arr1<S>, E: f64, dx: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let mut p: nd::Array1<f64>
        = V.mapv(|Vk| {
            if E > Vk { (2.0 * (E - Vk)).sqrt().recip() / PI } else { 0.0 }
        });
    let norm = p.sum() * dx;
    if norm > 0.0 { p /= norm; }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well() -> nd::Array1<f64> {
        (0..101_usize).map(|k| (k as f64 - 50.0).powi(2) / 100.0).collect()
    }

    #[test]
    fn turning_points_of_well() {
        let V = well();
        let tp = classical_turning_points(&V, 4.0);
        // (k - 50)² < 400  <=>  31 <= k <= 69
        assert_eq!(tp, TurningPoints { left: 31, right: 69 });
        assert!(tp.contains(50));
        assert!(!tp.contains(30));
    }

    #[test]
    fn energy_below_everything_falls_back() {
        let V = well();
        assert_eq!(classical_turning_points(&V, -1.0), TurningPoints::full(101));
        // a sample exactly equal to the energy is not allowed
        assert_eq!(classical_turning_points(&V, 0.0), TurningPoints::full(101));
    }

    #[test]
    fn energy_above_everything() {
        let V = well();
        let tp = classical_turning_points(&V, 100.0);
        assert_eq!(tp, TurningPoints { left: 0, right: 100 });
    }

    #[test]
    fn single_allowed_sample() {
        let V = nd::array![3.0, 1.0, 2.0, 3.0];
        let tp = classical_turning_points(&V, 1.5);
        assert_eq!(tp, TurningPoints { left: 1, right: 1 });
    }

    #[test]
    fn checked_construction() {
        assert!(TurningPoints::new(2, 1, 5).is_err());
        assert!(TurningPoints::new(1, 5, 5).is_err());
        assert_eq!(
            TurningPoints::new(1, 4, 5).unwrap(),
            TurningPoints { left: 1, right: 4 },
        );
    }

    #[test]
    fn density_is_normalized() {
        let V = well();
        let dx = 0.1;
        let p = classical_density(&V, 4.0, dx);
        assert!((p.sum() * dx - 1.0).abs() < 1e-12);
        assert_eq!(p[20], 0.0);
        // slowest near the turning points
        assert!(p[32] > p[50]);
        assert!(classical_density(&V, -1.0, dx).iter().all(|pk| *pk == 0.0));
    }
}
