//! Unit conversions at the wire/internal boundary.
//!
//! Internal units are nm, kJ/mol, amu, and ps. External residue positions
//! arrive in angstrom; the integration timestep is stated in femtoseconds by
//! convention. Conversions happen exactly once, through these helpers.

#[inline]
pub const fn angstrom_to_nm(value: f64) -> f64 {
    value * 0.1
}

#[inline]
pub const fn femtoseconds_to_picoseconds(value: f64) -> f64 {
    value * 1e-3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angstrom_to_nm_scales_by_one_tenth() {
        assert_eq!(angstrom_to_nm(3.8), 0.38);
        assert_eq!(angstrom_to_nm(0.0), 0.0);
        assert_eq!(angstrom_to_nm(-10.0), -1.0);
    }

    #[test]
    fn femtoseconds_to_picoseconds_scales_by_one_thousandth() {
        assert_eq!(femtoseconds_to_picoseconds(2.0), 0.002);
    }
}
