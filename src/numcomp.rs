//! tiny module with numerical comparison helpers shared by the solvers

/// default numerical tolerance for singularity detection
pub const DEFAULT_TOL: f64 = 1e-12;

pub fn equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

pub fn isnull(a: f64, tol: f64) -> bool {
    equal(a, 0.0, tol)
}
