//! Source text lookup for indexed documents.

mod text;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use scip::types::Document;
use tracing::debug;

pub use text::SourceText;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("unable to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Run-scoped cache of document text keyed by relative path.
///
/// Embedded document text wins; otherwise the file is read from `root`.
/// Entries are never invalidated: a run works on one snapshot of the tree.
#[derive(Debug)]
pub struct SourceCache {
    root: PathBuf,
    entries: HashMap<String, SourceText>,
}

impl SourceCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the text for `document`, loading it on first use.
    pub fn text_for(
        &mut self,
        document: &Document,
    ) -> Result<&SourceText, SourceError> {
        match self.entries.entry(document.relative_path.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let text = if document.text.is_empty() {
                    read_from_disk(&self.root, &document.relative_path)?
                } else {
                    document.text.clone()
                };
                Ok(entry.insert(SourceText::new(text)))
            },
        }
    }
}

impl Default for SourceCache {
    fn default() -> Self {
        Self::new(".")
    }
}

fn read_from_disk(
    root: &Path,
    relative_path: &str,
) -> Result<String, SourceError> {
    let joined = root.join(relative_path);
    let path = std::path::absolute(&joined).unwrap_or(joined);
    let text = std::fs::read_to_string(&path).map_err(|source| SourceError::Read {
        path: path.clone(),
        source,
    })?;
    debug!("[source-cache] loaded {}", path.display());
    Ok(text)
}

#[cfg(test)]
#[path = "../../tests/src/source/cache_tests.rs"]
mod tests;
