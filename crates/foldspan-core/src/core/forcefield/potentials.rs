#[inline]
pub fn lennard_jones(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    if dist < 1e-6 {
        return 1e10;
    }
    let rho = sigma / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    4.0 * epsilon * (rho12 - rho6)
}

// Force magnitudes multiply the unit separation vector; positive pushes the
// pair apart.
#[inline]
pub fn lennard_jones_force(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    if dist < 1e-6 {
        return 1e10;
    }
    let rho = sigma / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    24.0 * epsilon * (2.0 * rho12 - rho6) / dist
}

#[inline]
pub fn harmonic_bond(dist: f64, equilibrium: f64, stiffness: f64) -> f64 {
    let stretch = dist - equilibrium;
    0.5 * stiffness * stretch * stretch
}

#[inline]
pub fn harmonic_bond_force(dist: f64, equilibrium: f64, stiffness: f64) -> f64 {
    -stiffness * (dist - equilibrium)
}

#[inline]
pub fn mixed_sigma(sigma1: f64, sigma2: f64) -> f64 {
    0.5 * (sigma1 + sigma2)
}

#[inline]
pub fn mixed_epsilon(epsilon1: f64, epsilon2: f64) -> f64 {
    (epsilon1 * epsilon2).sqrt()
}
