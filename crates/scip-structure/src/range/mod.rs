//! Line-range resolution for definition occurrences.
//!
//! SCIP occurrences frequently carry only the declaration line of a symbol.
//! This module selects the definition occurrence, decodes its range, and
//! widens same-line ranges to the enclosing brace block so callers get a
//! usable multi-line span and snippet.

mod balance;
mod occurrence;
mod resolver;
mod snippet;

pub use balance::find_block_end;
pub use occurrence::{DecodedRange, decode_range, find_definition};
pub use resolver::{LineSpan, RangeAdjustment, ResolvedRange, resolve, resolve_detached};
pub use snippet::extract;

/// Per-symbol failure while locating or resolving a definition range.
///
/// None of these abort a run: the assembler logs them and skips the symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("no definition occurrence")]
    NoDefinition,
    #[error("definition not found or invalid range")]
    InvalidRange,
    #[error("start line {start} exceeds total lines ({line_count})")]
    StartPastEof {
        start: usize,
        line_count: usize,
    },
    #[error("could not find closing brace")]
    UnbalancedBlock,
    #[error("invalid line range: start={start}, end={end}, lines={line_count}")]
    OutOfBounds {
        start: usize,
        end: usize,
        line_count: usize,
    },
}
