use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// The execution strategy resolved for one process invocation.
///
/// Selection happens exactly once, before any computation, and the resulting
/// value is injected into the evaluation workflow. There is no re-probing and
/// no mid-call fallback: whichever strategy is selected produces the entire
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Closed-form deterministic evaluation; always available.
    Heuristic,
    /// Langevin dynamics over the coarse-grained chain.
    Simulated,
}

/// Caller preference for strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Probe the simulation toolkit and fall back silently to the heuristic.
    #[default]
    Auto,
    /// Force the closed-form path.
    Heuristic,
    /// Demand the simulation path; selection fails if it cannot run.
    Simulation,
}

impl FromStr for BackendPreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "heuristic" => Ok(BackendPreference::Heuristic),
            "simulation" | "simulated" => Ok(BackendPreference::Simulation),
            _ => Err(()),
        }
    }
}

impl Backend {
    /// Resolves the strategy for this invocation.
    ///
    /// Under [`BackendPreference::Auto`] the simulation toolkit is probed
    /// once: a two-bead chain is built and advanced a single step, and the
    /// strategy is `Simulated` only when that smoke run produces finite
    /// state. Toolkit absence is silent under auto.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SimulationUnavailable`] only when the caller
    /// explicitly demanded the simulation path and it cannot run.
    pub fn select(preference: BackendPreference) -> Result<Self, EngineError> {
        let backend = match preference {
            BackendPreference::Heuristic => Backend::Heuristic,
            BackendPreference::Auto => {
                if simulation_available() {
                    Backend::Simulated
                } else {
                    Backend::Heuristic
                }
            }
            BackendPreference::Simulation => {
                if simulation_available() {
                    Backend::Simulated
                } else {
                    return Err(EngineError::SimulationUnavailable {
                        reason: "the simulation toolkit is not compiled in or failed its probe",
                    });
                }
            }
        };
        debug!(backend = backend.name(), "execution strategy selected");
        Ok(backend)
    }

    /// Short lowercase name for logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Heuristic => "heuristic",
            Backend::Simulated => "simulated",
        }
    }
}

#[cfg(feature = "simulation")]
fn simulation_available() -> bool {
    use crate::core::models::level::ResolutionLevel;
    use crate::core::models::request::ResidueDescriptor;
    use crate::engine::{builder, runner};

    let system = builder::build_chain(
        &[ResidueDescriptor::default(), ResidueDescriptor::default()],
        ResolutionLevel::Toy,
    );
    runner::integrate(system, 300.0, 1, Some(0)).is_ok()
}

#[cfg(not(feature = "simulation"))]
fn simulation_available() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_heuristic_never_fails() {
        let backend = Backend::select(BackendPreference::Heuristic).unwrap();
        assert_eq!(backend, Backend::Heuristic);
    }

    #[test]
    fn preference_parsing_is_case_insensitive() {
        assert_eq!(
            "AUTO".parse::<BackendPreference>(),
            Ok(BackendPreference::Auto)
        );
        assert_eq!(
            "Simulation".parse::<BackendPreference>(),
            Ok(BackendPreference::Simulation)
        );
        assert!("gpu".parse::<BackendPreference>().is_err());
    }

    #[test]
    fn backend_names_are_stable() {
        assert_eq!(Backend::Heuristic.name(), "heuristic");
        assert_eq!(Backend::Simulated.name(), "simulated");
    }

    #[cfg(feature = "simulation")]
    #[test]
    fn auto_selects_the_simulated_strategy_when_the_toolkit_probes_clean() {
        let backend = Backend::select(BackendPreference::Auto).unwrap();
        assert_eq!(backend, Backend::Simulated);
    }

    #[cfg(feature = "simulation")]
    #[test]
    fn forced_simulation_succeeds_with_the_toolkit_present() {
        let backend = Backend::select(BackendPreference::Simulation).unwrap();
        assert_eq!(backend, Backend::Simulated);
    }

    #[cfg(not(feature = "simulation"))]
    #[test]
    fn auto_falls_back_to_heuristic_without_the_toolkit() {
        let backend = Backend::select(BackendPreference::Auto).unwrap();
        assert_eq!(backend, Backend::Heuristic);
    }

    #[cfg(not(feature = "simulation"))]
    #[test]
    fn forced_simulation_fails_without_the_toolkit() {
        let result = Backend::select(BackendPreference::Simulation);
        assert!(matches!(
            result,
            Err(EngineError::SimulationUnavailable { .. })
        ));
    }
}
