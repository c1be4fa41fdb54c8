#![allow(non_snake_case)]

//! Integration tests: harmonic well end to end, from a sampled potential to
//! position- and momentum-space wavefunctions.

use ndarray as nd;
use qwell::{
    classical::classical_turning_points,
    fourier,
    numerov::{ NumerovInput, Parity, index_of_minimum },
    solve::System,
    wavefunction::{ Wavefunction, average },
    ComplexSeq,
    Superposition,
};

const N: usize = 1025;
const MAX_X: f64 = 20.0;

fn harmonic() -> nd::Array1<f64> {
    let dx = MAX_X / N as f64;
    let c = (N - 1) as f64 / 2.0;
    (0..N).map(|k| 0.5 * ((k as f64 - c) * dx).powi(2)).collect()
}

fn stationary(V: &nd::Array1<f64>, E: f64) -> Wavefunction {
    let input = NumerovInput::new(V, E, MAX_X).unwrap();
    let tp = classical_turning_points(V, E);
    let even = Wavefunction::resolve(&input.integrate(Parity::Even), tp)
        .unwrap();
    let odd = Wavefunction::resolve(&input.integrate(Parity::Odd), tp)
        .unwrap();
    average(&even, &odd).unwrap()
}

#[test]
fn second_excited_state_is_smooth_and_even() {
    let V = harmonic();
    let wf = stationary(&V, 2.5);
    let meta = wf.metadata();
    assert!(meta.left_discontinuity.abs() < 0.01, "{meta:?}");
    assert!(meta.right_discontinuity.abs() < 0.01, "{meta:?}");
    assert!((wf.norm() - 1.0).abs() < 1e-6);
    let q = wf.values().re();
    for k in 0..N / 2 {
        assert!(
            (q[k] - q[N - 1 - k]).abs() < 1e-8,
            "asymmetry at {k}: {} vs {}", q[k], q[N - 1 - k]
        );
    }
}

#[test]
fn first_excited_state_is_odd() {
    let V = harmonic();
    let wf = stationary(&V, 1.5);
    let meta = wf.metadata();
    assert!(meta.left_discontinuity.abs() < 0.01, "{meta:?}");
    assert!(meta.right_discontinuity.abs() < 0.01, "{meta:?}");
    let q = wf.values().re();
    for k in 0..N / 2 {
        assert!((q[k] + q[N - 1 - k]).abs() < 1e-8);
    }
    assert_eq!(q[N / 2], 0.0);
}

#[test]
fn normalized_for_any_energy() {
    let V = harmonic();
    for E in [0.3, 0.5, 1.1, 2.0, 2.5, 6.75, 49.0, 80.0, -3.0] {
        let wf = stationary(&V, E);
        let total: f64 = wf.density().sum() * wf.dx();
        assert!((total - 1.0).abs() < 1e-6, "E = {E}: norm {total}");
    }
}

#[test]
fn turning_points_are_ordered() {
    let V = harmonic();
    for E in [-1.0, 0.0, 0.01, 1.0, 10.0, 49.9, 50.0, 1e3] {
        let tp = classical_turning_points(&V, E);
        assert!(tp.left <= tp.right);
        assert!(tp.right < N);
    }
    let tp = classical_turning_points(&V, 1e3);
    assert_eq!((tp.left, tp.right), (0, N - 1));
}

#[test]
fn tied_minima_stay_in_the_middle() {
    let mut V: nd::Array1<f64> = nd::Array1::from_elem(N, 1.0);
    V[400] = 0.0;
    V[401] = 0.0;
    let k = index_of_minimum(&V);
    assert!(k == 400 || k == 401);

    let mut V = harmonic();
    V[0] = -10.0;
    assert_eq!(index_of_minimum(&V), 1);
    V[0] = 0.0;
    V[N - 1] = -10.0;
    assert_eq!(index_of_minimum(&V), N - 2);
}

#[test]
fn averaging_a_copy_is_smooth() {
    let V = harmonic();
    let input = NumerovInput::new(&V, 1.2, MAX_X).unwrap();
    let tp = classical_turning_points(&V, 1.2);
    for parity in [Parity::Even, Parity::Odd] {
        let wf = Wavefunction::resolve(&input.integrate(parity), tp).unwrap();
        let copy = wf.clone();
        let avg = average(&wf, &copy).unwrap();
        assert!(avg.metadata().left_discontinuity.abs() <= 0.01);
        assert!(avg.metadata().right_discontinuity.abs() <= 0.01);
    }
}

#[test]
fn rotor_transform_matches_naive() {
    let V = harmonic();
    let wf = stationary(&V, 3.5);
    let dx = wf.dx();
    for (center, dfreq) in [(512, dx), (300, 0.5 * dx), (700, 2.3 * dx)] {
        let fast = fourier::fourier_transform(wf.values(), dx, center, dfreq);
        let slow = fourier::fourier_transform_naive(wf.values(), dx, center, dfreq);
        for (a, b) in fast.iter().zip(slow.iter()) {
            assert!((a.re - b.re).abs() < 1e-4);
            assert!((a.im - b.im).abs() < 1e-4);
        }
    }
}

#[test]
fn superposition_transform_is_linear() {
    let V = harmonic();
    let a = stationary(&V, 0.5);
    let b = stationary(&V, 1.5);
    let s = Superposition::new(vec![a.clone(), b.clone()]).unwrap();
    let lhs = s.fourier_transform(512, 1.0);
    let rhs = Superposition::new(vec![
        a.fourier_transform(512, 1.0),
        b.fourier_transform(512, 1.0),
    ]).unwrap();
    for t in [0.0, 1.0, 4.5] {
        for k in (0..N).step_by(8) {
            let (l, r) = (lhs.value_at(k, t), rhs.value_at(k, t));
            assert!((l.re - r.re).abs() < 1e-4 && (l.im - r.im).abs() < 1e-4);
        }
    }
}

#[test]
fn system_matches_manual_pipeline() {
    let sys = System::from_fn(N, MAX_X, |x| 0.5 * x * x).unwrap();
    let V = harmonic();
    for E in [0.7, 2.5] {
        let a = sys.solve(E).unwrap();
        let b = stationary(&V, E);
        let diff: f64
            = a.values().iter().zip(b.values().iter())
            .map(|(x, y)| (x - y).norm())
            .fold(0.0, f64::max);
        assert!(diff < 1e-12);
    }
}

#[test]
fn momentum_density_of_ground_state() {
    let V = harmonic();
    let wf = stationary(&V, 0.5);
    let phi = wf.fourier_transform(N / 2, 1.0);
    let expected: ComplexSeq = wf.values().clone();
    let diff: f64
        = phi.density().iter().zip(expected.norm_sqr().iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    assert!(diff < 1e-4);
}
