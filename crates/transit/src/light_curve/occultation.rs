//! Occultation integrals for polynomial limb darkening.
//!
//! The stellar intensity profile is `I(mu) = 1 - sum_n u_n (1 - mu)^n` with
//! `mu = sqrt(1 - r^2)` the cosine of the viewing angle at projected radius
//! `r`. Flux blocked by an opaque companion splits into two pieces:
//!
//! * annuli fully inside the companion disk, integrated in closed form;
//! * annuli crossing the companion limb, where the covered azimuth is
//!   `2 acos((b^2 + r^2 - p^2) / (2 b r))`, integrated numerically.
//!
//! The numerical piece is evaluated after substituting
//! `r(theta) = mid - half_width * cos(theta)`: both window edges and the
//! stellar limb are square-root branch points in `r` but analytic in
//! `theta`, so Gauss-Legendre quadrature in `theta` converges spectrally.

use std::f64::consts::PI;

/// Intensity profile at cosine-angle `mu`, unnormalized.
pub(crate) fn intensity(u: &[f64], mu: f64) -> f64 {
    let mut value = 1.0;
    let mut factor = 1.0;
    for coeff in u {
        factor *= 1.0 - mu;
        value -= coeff * factor;
    }
    value
}

/// Total disk flux `2 pi int_0^1 I(r) r dr`.
pub(crate) fn total_flux(u: &[f64]) -> f64 {
    let mut integral = 0.5;
    for (n, coeff) in u.iter().enumerate() {
        let n = n as f64 + 1.0;
        integral -= coeff / ((n + 1.0) * (n + 2.0));
    }
    2.0 * PI * integral
}

/// Flux inside the star-centered disk of radius `radius <= 1`:
/// `2 pi int_0^radius I(r) r dr`, in closed form.
fn flux_inside(u: &[f64], radius: f64) -> f64 {
    let mu = (1.0 - radius * radius).max(0.0).sqrt();
    let s = 1.0 - mu;
    let mut integral = radius * radius / 2.0;
    let mut power = s;
    for (n, coeff) in u.iter().enumerate() {
        let n = n as f64 + 1.0;
        // int_mu^1 (1 - m)^n m dm = s^(n+1)/(n+1) - s^(n+2)/(n+2)
        power *= s;
        integral -= coeff * (power / (n + 1.0) - power * s / (n + 2.0));
    }
    2.0 * PI * integral
}

/// Fraction of the total stellar flux blocked by an opaque disk of radius
/// `ror` at projected center separation `b`, both in stellar radii.
pub(crate) fn occulted_fraction(
    u: &[f64],
    b: f64,
    ror: f64,
    nodes: &[f64],
    weights: &[f64],
) -> f64 {
    if ror <= 0.0 || b >= 1.0 + ror {
        return 0.0;
    }
    if b + 1.0 <= ror {
        return 1.0;
    }

    let norm = total_flux(u);

    // Concentric case: a plain partial eclipse with no azimuthal dependence.
    if b < 1e-12 {
        return flux_inside(u, ror.min(1.0)) / norm;
    }

    // Annuli entirely behind the companion.
    let mut blocked = 0.0;
    if ror > b {
        blocked += flux_inside(u, (ror - b).min(1.0));
    }

    // Annuli crossing the companion limb.
    let r_lo = (b - ror).abs();
    let r_hi = (b + ror).min(1.0);
    if r_lo < r_hi {
        let mid = 0.5 * (r_lo + r_hi);
        let half_width = 0.5 * (r_hi - r_lo);
        let mut integral = 0.0;
        for (x, w) in nodes.iter().zip(weights) {
            // Map [-1, 1] to theta in [0, pi], then to r.
            let theta = 0.5 * PI * (x + 1.0);
            let r = mid - half_width * theta.cos();
            let cos_phi = ((b * b + r * r - ror * ror) / (2.0 * b * r)).clamp(-1.0, 1.0);
            let phi = cos_phi.acos();
            let mu = (1.0 - r * r).max(0.0).sqrt();
            integral += w * phi * intensity(u, mu) * r * half_width * theta.sin();
        }
        // Factor 2 for the full covered arc, pi/2 for the x -> theta Jacobian.
        blocked += PI * integral;
    }

    blocked / norm
}
