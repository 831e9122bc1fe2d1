use nalgebra::Point3;

/// One coarse-grained bead of the chain.
///
/// A bead stands in for a whole residue: it carries the interaction
/// parameters of the nonbonded potential and its current position in
/// internal units (nm).
#[derive(Debug, Clone, PartialEq)]
pub struct Bead {
    /// Mass in atomic mass units.
    pub mass: f64,
    /// Lennard-Jones sigma in nm.
    pub sigma: f64,
    /// Lennard-Jones well depth in kJ/mol.
    pub epsilon: f64,
    /// Position in nm.
    pub position: Point3<f64>,
}

/// Harmonic bond between two beads, addressed by bead index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicBond {
    /// Index of the first bonded bead.
    pub i: usize,
    /// Index of the second bonded bead.
    pub j: usize,
    /// Equilibrium length in nm.
    pub equilibrium_length: f64,
    /// Stiffness in kJ/mol/nm².
    pub stiffness: f64,
}

/// The ephemeral particle chain evaluated by the simulation strategy.
///
/// A system is built for exactly one integration window, owned exclusively
/// by the runner that advances it, and discarded once metrics are extracted.
/// Bead indices are stable for the lifetime of the system and double as the
/// bond endpoints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParticleSystem {
    beads: Vec<Bead>,
    bonds: Vec<HarmonicBond>,
}

impl ParticleSystem {
    /// Creates an empty system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty system with room for `bead_count` beads.
    pub fn with_capacity(bead_count: usize) -> Self {
        Self {
            beads: Vec::with_capacity(bead_count),
            bonds: Vec::with_capacity(bead_count.saturating_sub(1)),
        }
    }

    /// Appends a bead and returns its index.
    pub fn add_bead(&mut self, bead: Bead) -> usize {
        self.beads.push(bead);
        self.beads.len() - 1
    }

    /// Appends a bond between two existing beads.
    pub fn add_bond(&mut self, bond: HarmonicBond) {
        self.bonds.push(bond);
    }

    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    pub fn bonds(&self) -> &[HarmonicBond] {
        &self.bonds
    }

    pub fn len(&self) -> usize {
        self.beads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    /// Snapshot of all bead positions, in bead order.
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.beads.iter().map(|bead| bead.position).collect()
    }

    /// All bead masses, in bead order.
    pub fn masses(&self) -> Vec<f64> {
        self.beads.iter().map(|bead| bead.mass).collect()
    }
}
