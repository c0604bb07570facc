//! Steinhardt bond-orientational order parameters.
//!
//! `q_l = sqrt( 4π/(2l+1) · Σ_m |⟨Y_lm⟩|² )` over the unit bond vectors of a
//! site, following Steinhardt, Nelson & Ronchetti, Phys. Rev. B 28, 784
//! (1983). The `m < 0` terms are folded in through conjugate symmetry.

use nalgebra::Vector3;
use std::f64::consts::PI;

/// The degree-`l` bond-orientational order parameter of a unit-direction
/// set, or `None` for an empty set.
pub(crate) fn steinhardt(l: u32, units: &[Vector3<f64>]) -> Option<f64> {
    if units.is_empty() {
        return None;
    }
    let n = units.len() as f64;
    let mut total = 0.0;
    for m in 0..=l {
        let mut re = 0.0;
        let mut im = 0.0;
        for u in units {
            let cos_theta = u.z.clamp(-1.0, 1.0);
            let phi = u.y.atan2(u.x);
            let y = spherical_harmonic_magnitude(l, m, cos_theta);
            re += y * (f64::from(m) * phi).cos();
            im += y * (f64::from(m) * phi).sin();
        }
        let mean_sq = (re * re + im * im) / (n * n);
        total += if m == 0 { mean_sq } else { 2.0 * mean_sq };
    }
    Some((total * 4.0 * PI / f64::from(2 * l + 1)).sqrt())
}

/// The real prefactor of `Y_lm`: normalization times `P_l^m(cos θ)`.
fn spherical_harmonic_magnitude(l: u32, m: u32, cos_theta: f64) -> f64 {
    let norm = ((f64::from(2 * l + 1) / (4.0 * PI))
        * (factorial(l - m) / factorial(l + m)))
    .sqrt();
    norm * associated_legendre(l, m, cos_theta)
}

/// `P_l^m(x)` by the standard upward recurrence (Condon-Shortley phase).
fn associated_legendre(l: u32, m: u32, x: f64) -> f64 {
    let mut pmm = 1.0;
    if m > 0 {
        let somx2 = ((1.0 - x) * (1.0 + x)).max(0.0).sqrt();
        let mut fact = 1.0;
        for _ in 0..m {
            pmm *= -fact * somx2;
            fact += 2.0;
        }
    }
    if l == m {
        return pmm;
    }
    let mut pmmp1 = x * f64::from(2 * m + 1) * pmm;
    if l == m + 1 {
        return pmmp1;
    }
    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        pll = (f64::from(2 * ll - 1) * x * pmmp1 - f64::from(ll + m - 1) * pmm)
            / f64::from(ll - m);
        pmm = pmmp1;
        pmmp1 = pll;
    }
    pll
}

fn factorial(n: u32) -> f64 {
    (2..=n).map(f64::from).product()
}
