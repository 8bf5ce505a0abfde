//! Tests for iterative solvers (Jacobi, Gauss-Seidel, CG) vs the direct LU
//! solver on random systems.
//!
//! The iterative solvers must reproduce the direct solution elementwise on
//! random SPD and diagonally dominant matrices, report exhaustion honestly
//! when starved of iterations, and stay converged when re-run on their own
//! output.

use approx::assert_abs_diff_eq;
use lakit::matrix::{Mat, calculate_residual, l2_norm, mat_mult};
use lakit::solver::{CgSolver, GaussSeidelSolver, JacobiSolver, LinearSolver, lu_solve};
use rand::Rng;

/// Random SPD (and diagonally dominant) matrix `Mᵀ·M + n·I` with a random
/// right-hand side.
fn random_spd(n: usize) -> (Mat<f64>, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let m = Mat::from_raw(n, n, data).unwrap();
    let mut a = mat_mult(&m.transpose(), &m).unwrap();
    for i in 0..n {
        a[(i, i)] += n as f64;
    }
    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    (a, b)
}

#[test]
fn cg_vs_direct_on_spd() {
    let n = 10;
    let (a, b) = random_spd(n);
    let mut x_cg = vec![0.0; n];
    let stats = CgSolver::new(1e-10, 1000).solve(&a, &b, &mut x_cg).unwrap();
    assert!(stats.converged);

    let x_direct = lu_solve(&a, &b).unwrap();
    for i in 0..n {
        assert_abs_diff_eq!(x_cg[i], x_direct[i], epsilon = 1e-6);
    }
}

/// Random strictly diagonally dominant matrix: each diagonal entry exceeds
/// the absolute sum of the rest of its row.
fn random_diagonally_dominant(n: usize) -> (Mat<f64>, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let mut a = Mat::from_fn(n, n, |_, _| rng.r#gen::<f64>() - 0.5);
    for i in 0..n {
        let off_diagonal: f64 = (0..n).filter(|&j| j != i).map(|j| a[(i, j)].abs()).sum();
        a[(i, i)] = off_diagonal + 1.0 + rng.r#gen::<f64>();
    }
    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    (a, b)
}

#[test]
fn jacobi_and_gauss_seidel_vs_direct_on_diagonally_dominant() {
    let n = 10;
    let (a, b) = random_diagonally_dominant(n);
    let x_direct = lu_solve(&a, &b).unwrap();

    let mut x_j = vec![0.0; n];
    let stats_j = JacobiSolver::new(1e-10, 5000).solve(&a, &b, &mut x_j).unwrap();
    assert!(stats_j.converged);

    let mut x_gs = vec![0.0; n];
    let stats_gs = GaussSeidelSolver::new(1e-10, 5000).solve(&a, &b, &mut x_gs).unwrap();
    assert!(stats_gs.converged);

    for i in 0..n {
        assert_abs_diff_eq!(x_j[i], x_direct[i], epsilon = 1e-6);
        assert_abs_diff_eq!(x_gs[i], x_direct[i], epsilon = 1e-6);
    }
}

#[test]
fn solutions_meet_the_requested_residual_tolerance() {
    let n = 8;
    let (a, b) = random_spd(n);
    let tol = 1e-8;

    let mut x = vec![0.0; n];
    let stats = CgSolver::new(tol, 1000).solve(&a, &b, &mut x).unwrap();
    assert!(stats.converged);
    let residual = calculate_residual(&a, &b, &x).unwrap();
    assert!(l2_norm(&residual) < tol, "residual = {}", l2_norm(&residual));
}

#[test]
fn starved_budget_is_reported_as_exhaustion() {
    let n = 10;
    let (a, b) = random_spd(n);

    let mut x = vec![0.0; n];
    let stats = JacobiSolver::new(1e-14, 2).solve(&a, &b, &mut x).unwrap();
    assert!(!stats.converged);
    assert_eq!(stats.iterations, 2);

    // the best-so-far iterate is still handed back
    assert!(x.iter().any(|&xi| xi != 0.0));
}

#[test]
fn rerunning_a_converged_solve_stays_converged() {
    let n = 8;
    let (a, b) = random_spd(n);
    let tol = 1e-8;

    let mut x = vec![0.0; n];
    let first = CgSolver::new(tol, 1000).solve(&a, &b, &mut x).unwrap();
    assert!(first.converged);

    let second = CgSolver::new(tol, 1000).solve(&a, &b, &mut x).unwrap();
    assert!(second.converged);
    assert!(second.final_residual < tol);

    let mut x_gs = vec![0.0; n];
    let first_gs = GaussSeidelSolver::new(tol, 5000).solve(&a, &b, &mut x_gs).unwrap();
    assert!(first_gs.converged);
    let second_gs = GaussSeidelSolver::new(tol, 5000).solve(&a, &b, &mut x_gs).unwrap();
    assert!(second_gs.converged);
}
