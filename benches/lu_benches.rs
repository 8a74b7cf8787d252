use RustedLU::dense::matrix::DenseMatrix;
use RustedLU::lu::factorize::LUDecomposition;
use RustedLU::lu::solve::solve_default;
use criterion::{Criterion, criterion_group, criterion_main};
use nalgebra::DVector;
use rand::Rng;
use std::hint::black_box;

fn random_system(n: usize) -> (DenseMatrix, DVector<f64>) {
    let mut rng = rand::rng();
    let mut rows = vec![vec![0.0; n]; n];
    for (i, row) in rows.iter_mut().enumerate() {
        for v in row.iter_mut() {
            *v = rng.random_range(-1.0..1.0);
        }
        // keep the matrix comfortably non-singular
        row[i] += n as f64;
    }
    let b = DVector::from_fn(n, |_, _| rng.random_range(-1.0..1.0));
    (DenseMatrix::from_rows(rows).unwrap(), b)
}

fn bench_factorize(c: &mut Criterion) {
    let (A, _) = random_system(100);
    c.bench_function("factorize 100x100", |bench| {
        bench.iter(|| LUDecomposition::with_default_tol(black_box(&A)).unwrap())
    });
}

fn bench_solve(c: &mut Criterion) {
    let (A, b) = random_system(100);
    c.bench_function("solve 100x100", |bench| {
        bench.iter(|| solve_default(black_box(&A), black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_factorize, bench_solve);
criterion_main!(benches);
