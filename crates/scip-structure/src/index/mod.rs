//! Reading SCIP indexes and writing the element list.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use protobuf::Message;
use scip::types::Index;
use tracing::debug;

use crate::element::CodeElement;
use crate::error::ConvertError;

/// Read and decode a binary SCIP index.
pub fn read_index(path: &Path) -> Result<Index, ConvertError> {
    let data = std::fs::read(path).map_err(|source| ConvertError::ReadIndex {
        path: path.to_path_buf(),
        source,
    })?;
    let index = Index::parse_from_bytes(&data).map_err(|source| ConvertError::DecodeIndex {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Decoded {} documents from {}", index.documents.len(), path.display());
    Ok(index)
}

/// Write `elements` as a two-space indented JSON array followed by a newline.
pub fn write_elements(
    path: &Path,
    elements: &[CodeElement],
) -> Result<(), ConvertError> {
    let file = File::create(path).map_err(|source| ConvertError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let write_error = |source: std::io::Error| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, elements).map_err(|error| write_error(error.into()))?;
    writer.write_all(b"\n").map_err(write_error)?;
    writer.flush().map_err(write_error)
}

#[cfg(test)]
#[path = "../../tests/src/index/io_tests.rs"]
mod tests;
