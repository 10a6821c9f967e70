//! Geometry primitives shared by the pipeline stages.
//!
//! Coordinates are in page pixel space with y increasing downward.

/// Floating-point infinity stand-in for bounding box accumulation.
pub const INF_F64: f64 = f64::MAX;

/// A 6-element affine transformation matrix (a, b, c, d, e, f).
/// Transforms point (x, y) to (ax + cy + e, bx + dy + f).
pub type Matrix = (f64, f64, f64, f64, f64, f64);

/// Identity transformation matrix.
pub const MATRIX_IDENTITY: Matrix = (1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

/// Multiplies two matrices: result = m1 * m0.
/// This applies m0 first, then m1.
pub fn mult_matrix(m1: Matrix, m0: Matrix) -> Matrix {
    let (a1, b1, c1, d1, e1, f1) = m1;
    let (a0, b0, c0, d0, e0, f0) = m0;
    (
        a0 * a1 + c0 * b1,
        b0 * a1 + d0 * b1,
        a0 * c1 + c0 * d1,
        b0 * c1 + d0 * d1,
        a0 * e1 + c0 * f1 + e0,
        b0 * e1 + d0 * f1 + f0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mult_matrix_identity() {
        let m = (2.0, 0.0, 0.0, 2.0, 5.0, 7.0);
        assert_eq!(mult_matrix(MATRIX_IDENTITY, m), m);
        assert_eq!(mult_matrix(m, MATRIX_IDENTITY), m);
    }
}
