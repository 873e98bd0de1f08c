//! Level-1 kernels over flat buffers.
//!
//! Every loop runs front to back, so reductions are bit-reproducible for the
//! same input on the same machine.

/// x *= alpha
pub fn scal(alpha: f64, x: &mut [f64]) {
    for v in x.iter_mut() {
        *v *= alpha;
    }
}

/// y += alpha * x
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) {
    assert_eq!(x.len(), y.len(), "axpy: length mismatch");
    for (yi, xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
}

/// y *= x, elementwise.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn mul(x: &[f64], y: &mut [f64]) {
    assert_eq!(x.len(), y.len(), "mul: length mismatch");
    for (yi, xi) in y.iter_mut().zip(x) {
        *yi *= xi;
    }
}

/// Sum of x[i] * y[i].
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "dot: length mismatch");
    x.iter().zip(y).fold(0.0, |acc, (a, b)| acc + a * b)
}

pub fn sum(x: &[f64]) -> f64 {
    x.iter().fold(0.0, |acc, v| acc + v)
}

pub fn product(x: &[f64]) -> f64 {
    x.iter().fold(1.0, |acc, v| acc * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level1_basics() {
        let mut y = vec![1.0, 2.0, 3.0];
        axpy(2.0, &[1.0, 1.0, 1.0], &mut y);
        assert_eq!(y, [3.0, 4.0, 5.0]);

        scal(-1.0, &mut y);
        assert_eq!(y, [-3.0, -4.0, -5.0]);

        mul(&[2.0, 0.5, 0.0], &mut y);
        assert_eq!(y, [-6.0, -2.0, -0.0]);

        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
        assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
        assert_eq!(product(&[2.0, 3.0, 4.0]), 24.0);
    }

    #[test]
    #[should_panic(expected = "axpy: length mismatch")]
    fn axpy_rejects_short_y() {
        let mut y = vec![0.0; 2];
        axpy(1.0, &[1.0, 2.0, 3.0], &mut y);
    }
}
