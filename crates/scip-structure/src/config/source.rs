use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct SourceSettings {
    /// Directory that document paths in the index are relative to.
    pub root: PathBuf,
    /// Load source files to widen ranges and attach snippets.
    pub snippets: bool,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            snippets: true,
        }
    }
}

impl SourceSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: SourceSettingsPatch,
    ) {
        if let Some(v) = patch.root {
            self.root = v;
        }
        if let Some(v) = patch.snippets {
            self.snippets = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        if self.root.as_os_str().is_empty() {
            self.root = PathBuf::from(".");
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct SourceSettingsPatch {
    pub(crate) root: Option<PathBuf>,
    pub(crate) snippets: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}
