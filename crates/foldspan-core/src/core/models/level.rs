use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Represents the resolution level of one physics evaluation.
///
/// The level controls two independent knobs: how strongly a rotation command
/// is scaled by the heuristic strategy, and how stiff the bonded interactions
/// of the coarse-grained chain are under the simulation strategy. Level names
/// form a closed, case-insensitive set; any unrecognized name degrades to
/// [`ResolutionLevel::Other`] rather than failing, so parsing is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolutionLevel {
    /// Fastest, most heavily damped evaluation.
    #[default]
    Toy,
    /// Intermediate coarse-grained evaluation.
    Coarse,
    /// Generalized-Born-like evaluation; the neutral scaling point.
    Gb,
    /// Highest-fidelity evaluation with the strongest command scaling.
    Full,
    /// Catch-all for unrecognized level names. Scales like `Gb` (factor 1.0)
    /// but bonds as stiffly as `Full`; it is NOT equivalent to either.
    Other,
}

static LEVELS: phf::Map<&'static str, ResolutionLevel> = phf_map! {
    "toy" => ResolutionLevel::Toy,
    "coarse" => ResolutionLevel::Coarse,
    "gb" => ResolutionLevel::Gb,
    "full" => ResolutionLevel::Full,
};

impl ResolutionLevel {
    /// Parses a level name, case-insensitively.
    ///
    /// Unrecognized names map to [`ResolutionLevel::Other`]; this function
    /// never fails.
    pub fn parse(name: &str) -> Self {
        LEVELS
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(ResolutionLevel::Other)
    }

    /// The factor applied to the command angle by the heuristic strategy.
    pub fn scaling_factor(self) -> f64 {
        match self {
            ResolutionLevel::Toy => 0.5,
            ResolutionLevel::Coarse => 0.75,
            ResolutionLevel::Gb => 1.0,
            ResolutionLevel::Full => 1.25,
            ResolutionLevel::Other => 1.0,
        }
    }

    /// Harmonic bond stiffness of the coarse-grained chain, in kJ/mol/nm².
    pub fn bond_stiffness(self) -> f64 {
        match self {
            ResolutionLevel::Toy => 30.0,
            ResolutionLevel::Coarse => 60.0,
            ResolutionLevel::Gb => 90.0,
            ResolutionLevel::Full | ResolutionLevel::Other => 120.0,
        }
    }

    /// Canonical lowercase name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionLevel::Toy => "toy",
            ResolutionLevel::Coarse => "coarse",
            ResolutionLevel::Gb => "gb",
            ResolutionLevel::Full => "full",
            ResolutionLevel::Other => "other",
        }
    }
}

impl fmt::Display for ResolutionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResolutionLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResolutionLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ResolutionLevel::parse(&name))
    }
}
