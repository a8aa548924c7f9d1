use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linear::{Dense, DenseMatrix, LinearSolver};

/// A diagonally dominant matrix with an anti-diagonal spike, so the solver needs to swap rows.
fn test_matrix(cols: usize) -> DenseMatrix {
    let mut mat_a = DenseMatrix::zeros(cols, cols);
    for i in 0..cols {
        for j in 0..cols {
            mat_a[(i, j)] = ((i * 7 + j * 13) % 17) as f64 / (17.0 * cols as f64);
        }
        mat_a[(i, cols - 1 - i)] += 2.0;
    }
    mat_a
}

fn bench_dense(mat_a: &DenseMatrix, b: &[f64]) {
    let mut dense = Dense::new();
    dense.setup(mat_a).unwrap();
    let x = dense.solve(b).unwrap();

    let b_comp = mat_a.mul_vec(&x).unwrap();
    let norm = b
        .iter()
        .zip(&b_comp)
        .map(|(x, y)| (x - y).powi(2))
        .fold(0.0, |acc, x| acc + x)
        .sqrt();
    assert!(norm < 1e-9);
}

fn criterion_benchmark(c: &mut Criterion) {
    for cols in [5, 10, 50] {
        let mat_a = test_matrix(cols);
        let b: Vec<f64> = (0..cols).map(|i| (i as f64) / (cols as f64)).collect();
        c.bench_function(&format!("Dense solver {cols}"), |bench| {
            bench.iter(|| bench_dense(black_box(&mat_a), black_box(&b)))
        });
        c.bench_function(&format!("Inverse {cols}"), |bench| {
            bench.iter(|| linear::inverse(black_box(&mat_a)).unwrap())
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
