//! Rank and product tests for generic dense matrices.

use linfield::config::SampleOptions;
use linfield::matrix::{Matrix, Vector};
use linfield::scalar::{Complex, Rational};
use rand::Rng;

fn qm(rows: &[&[i64]]) -> Matrix<Rational> {
    Matrix::from_nested_vec(
        rows.iter()
            .map(|r| r.iter().map(|&n| Rational::from(n)).collect())
            .collect(),
    )
    .unwrap()
}

fn random_int_matrix(nrows: usize, ncols: usize) -> Matrix<Rational> {
    let mut rng = rand::thread_rng();
    Matrix::from_nested_vec(
        (0..nrows)
            .map(|_| (0..ncols).map(|_| Rational::from(rng.gen_range(-4..=4))).collect())
            .collect(),
    )
    .unwrap()
}

#[test]
fn rank_of_known_matrices() {
    assert_eq!(Matrix::<Rational>::zeros(3, 4).unwrap().rank(), 0);
    assert_eq!(Matrix::<Rational>::identity(4).unwrap().rank(), 4);
    assert_eq!(qm(&[&[1, 2, 3], &[2, 4, 6], &[3, 6, 9]]).rank(), 1);
    assert_eq!(qm(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]).rank(), 2);
    assert_eq!(qm(&[&[0, 0, 1], &[0, 1, 0], &[1, 0, 0]]).rank(), 3);
}

/// rank(A) <= rank([A|b]) <= rank(A) + 1, and rank(A) <= min(m, n).
#[test]
fn rank_bounds_on_random_matrices() {
    let mut rng = rand::thread_rng();
    for _ in 0..30 {
        let m = rng.gen_range(1..=5);
        let n = rng.gen_range(1..=5);
        let a = random_int_matrix(m, n);
        let b = Vector::new((0..m).map(|_| Rational::from(rng.gen_range(-4..=4))).collect())
            .unwrap();
        let r = a.rank();
        let ra = a.augment_with(&b).unwrap().rank();
        assert!(r <= m.min(n));
        assert!(r <= ra && ra <= r + 1, "rank {r}, augmented {ra}");
        assert_eq!(a.transpose().rank(), r);
    }
}

#[test]
fn rank_leaves_the_matrix_untouched() {
    let a = random_int_matrix(4, 4);
    let copy = a.clone();
    let _ = a.rank();
    assert_eq!(a, copy);
}

#[test]
fn complex_rank_uses_tolerant_zero() {
    // second row is i times the first
    let a = Matrix::from_nested_vec(vec![
        vec![Complex::new(1.0, 1.0), Complex::new(2.0, 0.0)],
        vec![Complex::new(-1.0, 1.0), Complex::new(0.0, 2.0)],
    ])
    .unwrap();
    assert_eq!(a.rank(), 1);
}

#[test]
fn product_with_identity_and_associativity() {
    let mut rng = rand::thread_rng();
    let opts = SampleOptions::default();
    let rows = |r: usize, c: usize, rng: &mut rand::rngs::ThreadRng| {
        Matrix::from_rows(
            (0..r)
                .map(|_| Vector::<Rational>::random(c, &opts, rng).unwrap())
                .collect(),
        )
        .unwrap()
    };
    let a = rows(2, 3, &mut rng);
    let b = rows(3, 4, &mut rng);
    let c = rows(4, 2, &mut rng);
    let id = Matrix::identity(3).unwrap();
    assert_eq!(a.try_mul(&id).unwrap(), a);
    let left = a.try_mul(&b).unwrap().try_mul(&c).unwrap();
    let right = a.try_mul(&b.try_mul(&c).unwrap()).unwrap();
    assert_eq!(left, right);
    assert!(b.try_mul(&a).is_err());
}
