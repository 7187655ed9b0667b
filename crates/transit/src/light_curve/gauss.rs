//! Gauss-Legendre quadrature nodes.

/// Nodes and weights for `n`-point Gauss-Legendre quadrature on `[-1, 1]`,
/// in ascending node order.
///
/// Roots of the Legendre polynomial are found by Newton iteration from the
/// Chebyshev-angle estimate, which converges in a handful of steps for any
/// practical order.
pub(crate) fn gauss_legendre(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];

    for i in 0..n.div_ceil(2) {
        let mut x = (std::f64::consts::PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();

        for _ in 0..100 {
            let (p, dp) = legendre_with_derivative(n, x);
            let dx = p / dp;
            x -= dx;
            if dx.abs() < 1e-15 {
                break;
            }
        }

        let (_, dp) = legendre_with_derivative(n, x);
        let w = 2.0 / ((1.0 - x * x) * dp * dp);

        // The estimate above walks down from the largest root.
        nodes[n - 1 - i] = x;
        nodes[i] = -x;
        weights[n - 1 - i] = w;
        weights[i] = w;
    }

    (nodes, weights)
}

/// Evaluate the Legendre polynomial P_n and its derivative at `x` through
/// the three-term recurrence.
fn legendre_with_derivative(n: usize, x: f64) -> (f64, f64) {
    let mut prev = 1.0;
    let mut curr = x;
    for k in 2..=n {
        let next = ((2 * k - 1) as f64 * x * curr - (k - 1) as f64 * prev) / k as f64;
        prev = curr;
        curr = next;
    }
    let dp = n as f64 * (x * curr - prev) / (x * x - 1.0);
    (curr, dp)
}
