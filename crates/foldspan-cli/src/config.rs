use crate::cli::Cli;
use crate::error::{CliError, Result};
use foldspan::engine::backend::BackendPreference;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional file-backed settings, all overridable from the command line.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialBridgeConfig {
    backend: Option<BackendPreference>,
    seed: Option<u64>,
    #[serde(rename = "log-file")]
    log_file: Option<PathBuf>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeSettings {
    pub backend: BackendPreference,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl PartialBridgeConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final settings.
    ///
    /// Precedence is CLI argument, then file value, then built-in default:
    /// the `auto` strategy, entropy seeding, and console-only logging.
    pub fn merge_with_cli(self, cli: &Cli) -> BridgeSettings {
        BridgeSettings {
            backend: cli
                .backend
                .map(Into::into)
                .or(self.backend)
                .unwrap_or_default(),
            seed: cli.seed.or(self.seed),
            log_file: cli.log_file.clone().or(self.log_file),
        }
    }
}
