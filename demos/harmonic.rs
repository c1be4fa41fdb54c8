#![allow(non_snake_case)]

use tracing_subscriber::EnvFilter;
use qwell::solve::System;

// approximate stationary states of the harmonic well, ħ = m = ω = 1
//
// run with RUST_LOG=qwell=debug to trace each solve

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    const N: usize = 1025; // mesh size
    const MAX_X: f64 = 20.0; // domain width

    let system = System::from_fn(N, MAX_X, |x| 0.5 * x * x).unwrap();
    let x = system.get_x();
    let center = N / 2;

    // eigenvalues are (n + 1/2); the rest are in between
    println!(
        "{:>6} {:>6} {:>6} {:>12} {:>12} {:>6}",
        "E", "left", "right", "jump_l", "jump_r", "nodes"
    );
    for E in [0.5, 0.8, 1.0, 1.5, 1.9, 2.5, 3.5, 4.2] {
        let wf = system.solve(E).unwrap();
        let meta = wf.metadata();
        println!(
            "{:>6.2} {:>6} {:>6} {:>12.3e} {:>12.3e} {:>6}",
            E,
            meta.turning_points.left,
            meta.turning_points.right,
            meta.left_discontinuity,
            meta.right_discontinuity,
            wf.node_count(),
        );
    }

    // a highly excited state approaches the classical density on average
    let E = 20.5;
    let wf = system.solve(E).unwrap();
    let quantum = wf.density();
    let classical = system.classical_density(E);
    println!("\nE = {E}: quantum vs classical density");
    for k in (0..N).step_by(64) {
        println!("{:>8.3} {:>10.5} {:>10.5}", x[k], quantum[k], classical[k]);
    }

    // the ground state is its own Fourier transform
    let ground = system.solve(0.5).unwrap();
    let momentum = ground.fourier_transform(center, 1.0);
    println!("\nground state: position vs momentum amplitude");
    for k in (center - 128..=center + 128).step_by(32) {
        println!(
            "{:>8.3} {:>10.5} {:>10.5}",
            x[k], ground.values().at(k).re, momentum.values().at(k).norm(),
        );
    }

    // the superposition of the two lowest states sloshes back and forth with
    // period 2π / (E₁ - E₀) = 2π
    let slosh = system.solve_many(&[0.5, 1.5]).unwrap();
    println!("\nsuperposition: <x>(t)");
    for step in 0..=8 {
        let t = step as f64 * std::f64::consts::TAU / 8.0;
        let density = slosh.density_at(t);
        let norm = density.sum();
        let mean_x = (&density * &x).sum() / norm;
        println!("{:>8.3} {:>10.5}", t, mean_x);
    }
}
