//! Run configuration.
//!
//! Settings are split into one file per category. [`Settings`] aggregates
//! them and is built in three layers: defaults, an optional TOML file, and
//! command-line overrides.

pub(crate) mod logging;
pub(crate) mod source;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use logging::{LogLevel, LoggingSettings};
use logging::LoggingSettingsPatch;
use serde::Deserialize;
pub use source::SourceSettings;
use source::SourceSettingsPatch;

use crate::error::ConvertError;

pub const DEFAULT_INPUT: &str = "index.scip";
pub const DEFAULT_OUTPUT: &str = "structure.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source: SourceSettings,
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            source: SourceSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub source_root: Option<PathBuf>,
    pub verbose: bool,
}

impl Settings {
    /// Load settings from a TOML file on top of the defaults.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path).map_err(|error| ConvertError::Config {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|reason| ConvertError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let patch = toml::from_str::<SettingsPatch>(content).map_err(|error| error.message().to_string())?;
        let mut settings = Self::default();
        settings.apply_patch(patch);
        settings.normalize();
        Ok(settings)
    }

    pub fn with_overrides(
        mut self,
        overrides: SettingsOverrides,
    ) -> Self {
        if let Some(v) = overrides.input {
            self.input = v;
        }
        if let Some(v) = overrides.output {
            self.output = v;
        }
        if let Some(v) = overrides.source_root {
            self.source.root = v;
        }
        if overrides.verbose {
            self.logging.level = self.logging.level.max(LogLevel::Debug);
        }
        self.normalize();
        self
    }

    fn apply_patch(
        &mut self,
        patch: SettingsPatch,
    ) {
        if let Some(v) = patch.input {
            self.input = v;
        }
        if let Some(v) = patch.output {
            self.output = v;
        }
        if let Some(p) = patch.source {
            self.source.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.source.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct SettingsPatch {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    source: Option<SourceSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, toml::Value>,
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
