//! Flattened code elements and the converter that produces them.

mod converter;

use serde::Serialize;

pub use converter::{ConvertStats, Converter};

use crate::symbol::{CodeType, Context};

/// One output record per classified symbol with a definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeElement {
    pub name: String,
    pub signature: String,
    pub code_type: CodeType,
    pub docstring: String,
    /// 1-based line of the definition; always equal to `line_from`.
    pub line: u32,
    pub line_from: u32,
    pub line_to: u32,
    pub context: Context,
}
