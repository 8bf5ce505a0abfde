use lakit::matrix::{Mat, mat_mult};
use lakit::solver::{CgSolver, LinearSolver, LuDirectSolver};
use rand::Rng;

fn main() {
    let n = 10;
    // build a random SPD matrix: A = MᵀM + I
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let m = Mat::from_raw(n, n, data).unwrap();
    let mut a = mat_mult(&m.transpose(), &m).unwrap();
    for i in 0..n {
        a[(i, i)] += 1.0;
    }

    // rhs
    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let mut x = vec![0.0; n];

    // LU solve
    let mut lus = LuDirectSolver::new();
    let stats_lu = lus.solve(&a, &b, &mut x).unwrap();
    println!("LU x = {x:?}, stats = {stats_lu:?}");

    // CG solve
    let mut cgs = CgSolver::new(1e-10, 1000);
    let stats_cg = cgs.solve(&a, &b, &mut x).unwrap();
    println!("CG x = {x:?}, stats = {stats_cg:?}");
}
