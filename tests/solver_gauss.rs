//! Tests for the Gaussian-elimination solver against faer's LU on random systems.
//!
//! Rational systems are solved exactly, converted to `f64` and compared with
//! `FullPivLu` on the same data. Complex systems are checked by substitution.

use approx::assert_abs_diff_eq;
use faer::Mat;
use faer::linalg::solvers::SolveCore;
use linfield::config::SampleOptions;
use linfield::matrix::{Matrix, Vector};
use linfield::scalar::{Complex, Rational};
use linfield::solver::{GaussSolver, LinearSolver, LinearSystem, SolutionType};
use rand::Rng;

/// Random integer matrix made strictly diagonally dominant so it is nonsingular.
fn random_nonsingular(n: usize) -> (Vec<i64>, Vec<i64>) {
    let mut rng = rand::thread_rng();
    let mut data: Vec<i64> = (0..n * n).map(|_| rng.gen_range(-5..=5)).collect();
    for i in 0..n {
        data[i * n + i] = 6 * n as i64;
    }
    let b: Vec<i64> = (0..n).map(|_| rng.gen_range(-10..=10)).collect();
    (data, b)
}

#[test]
fn rational_solution_matches_faer_lu() {
    let n = 5;
    for _ in 0..10 {
        let (data, b) = random_nonsingular(n);
        let a = Matrix::from_nested_vec(
            (0..n)
                .map(|i| (0..n).map(|j| Rational::from(data[i * n + j])).collect())
                .collect(),
        )
        .unwrap();
        let rhs = Vector::new(b.iter().map(|&v| Rational::from(v)).collect()).unwrap();
        let mut system = LinearSystem::new(a, rhs).unwrap();
        assert_eq!(system.solve(), SolutionType::UniqueSolution);
        let x = system.solution().unwrap();
        assert!(system.verify_solution(x));

        // Direct solve using LU decomposition
        let fa = Mat::from_fn(n, n, |i, j| data[i * n + j] as f64);
        let mut x_direct: Vec<f64> = b.iter().map(|&v| v as f64).collect();
        let lus = faer::linalg::solvers::FullPivLu::new(fa.as_ref());
        let x_mat = faer::MatMut::from_column_major_slice_mut(&mut x_direct, n, 1);
        lus.solve_in_place_with_conj(faer::Conj::No, x_mat);
        for i in 0..n {
            assert_abs_diff_eq!(x[i].as_f64(), x_direct[i], epsilon = 1e-10);
        }
    }
}

#[test]
fn gauss_solver_through_trait() {
    let n = 4;
    let (data, b) = random_nonsingular(n);
    let a = Matrix::from_nested_vec(
        (0..n)
            .map(|i| (0..n).map(|j| Rational::from(data[i * n + j])).collect())
            .collect(),
    )
    .unwrap();
    let rhs = Vector::new(b.iter().map(|&v| Rational::from(v)).collect()).unwrap();
    let mut x = Vector::zeros(n).unwrap();
    let mut solver = GaussSolver::new();
    let stats = solver.solve(&a, &rhs, &mut x).unwrap();
    assert_eq!(stats.solution_type, SolutionType::UniqueSolution);
    assert_eq!((stats.rank, stats.augmented_rank, stats.variables), (n, n, n));
    assert_eq!(a.mul_vector(&x).unwrap(), rhs);
    assert_eq!(solver.system().unwrap().solution(), Some(&x));
}

#[test]
fn non_unique_systems_leave_output_untouched() {
    let a = Matrix::from_nested_vec(vec![
        vec![Rational::from(1), Rational::from(1)],
        vec![Rational::from(1), Rational::from(1)],
    ])
    .unwrap();
    let mut solver = GaussSolver::new();

    let inconsistent = Vector::new(vec![Rational::from(1), Rational::from(2)]).unwrap();
    let mut x = Vector::new(vec![Rational::from(7), Rational::from(7)]).unwrap();
    let stats = solver.solve(&a, &inconsistent, &mut x).unwrap();
    assert_eq!(stats.solution_type, SolutionType::NoSolution);
    assert_eq!(x.as_slice(), &[Rational::from(7), Rational::from(7)]);

    let consistent = Vector::new(vec![Rational::from(3), Rational::from(3)]).unwrap();
    let stats = solver.solve(&a, &consistent, &mut x).unwrap();
    assert_eq!(stats.solution_type, SolutionType::InfiniteSolutions);
    assert_eq!(x.as_slice(), &[Rational::from(7), Rational::from(7)]);
}

#[test]
fn random_rational_systems_classify_consistently() {
    let mut rng = rand::thread_rng();
    let opts = SampleOptions::default();
    for _ in 0..20 {
        let m = rng.gen_range(1..=6);
        let n = rng.gen_range(1..=6);
        let mut system = LinearSystem::<Rational>::random(m, n, &opts, &mut rng).unwrap();
        let expected = system.analyze_solution_type();
        assert_eq!(system.solve(), expected);
        match system.solution() {
            Some(x) => {
                assert_eq!(expected, SolutionType::UniqueSolution);
                assert!(system.verify_solution(x));
            }
            None => assert_ne!(expected, SolutionType::UniqueSolution),
        }
    }
    assert!(LinearSystem::<Rational>::random(0, 2, &opts, &mut rng).is_err());
}

/// Square systems drawn with the default sampler: fraction sizes grow with
/// every elimination step and must stay exact.
#[test]
fn random_square_rational_systems_solve_exactly() {
    let mut rng = rand::thread_rng();
    let opts = SampleOptions::default();
    let mut solved = 0;
    for n in 5..=8 {
        for _ in 0..5 {
            let mut system = LinearSystem::<Rational>::random(n, n, &opts, &mut rng).unwrap();
            let solution_type = system.solve();
            if solution_type != SolutionType::UniqueSolution {
                continue;
            }
            let x = system.solution().unwrap();
            assert!(system.verify_solution(x));
            assert_eq!(system.coefficients().mul_vector(x).unwrap(), *system.constants());
            solved += 1;
        }
    }
    assert!(solved > 0);
}

#[test]
fn random_complex_system_satisfies_equations() {
    let mut rng = rand::thread_rng();
    let opts = SampleOptions::default().with_magnitude(2.0);
    let n = 4;
    let rows = (0..n)
        .map(|i| {
            let mut row = Vector::<Complex>::random(n, &opts, &mut rng).unwrap().into_inner();
            row[i] = row[i] + Complex::from_real(10.0);
            Vector::new(row).unwrap()
        })
        .collect();
    let b = Vector::random(n, &opts, &mut rng).unwrap();
    let mut system = LinearSystem::from_equations(rows, b).unwrap();
    assert_eq!(system.solve(), SolutionType::UniqueSolution);
    let x = system.solution().unwrap().clone();
    let ax = system.coefficients().mul_vector(&x).unwrap();
    for (lhs, rhs) in ax.iter().zip(system.constants()) {
        assert_abs_diff_eq!(lhs.re, rhs.re, epsilon = 1e-9);
        assert_abs_diff_eq!(lhs.im, rhs.im, epsilon = 1e-9);
    }
}
