use scip::types::{Document, Occurrence, SymbolRole};

use super::RangeError;

/// Raw 1-based start and end lines taken from an occurrence range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedRange {
    pub start_line: i32,
    pub end_line: i32,
}

/// Return the first occurrence of `symbol` in `document` that carries the
/// definition role.
pub fn find_definition<'a>(
    document: &'a Document,
    symbol: &str,
) -> Result<&'a Occurrence, RangeError> {
    document
        .occurrences
        .iter()
        .find(|occ| occ.symbol == symbol && has_role(occ.symbol_roles, SymbolRole::Definition))
        .ok_or(RangeError::NoDefinition)
}

/// Decode a SCIP range.
///
/// `[startLine, startCol, endLine, endCol]` spans lines, `[startLine,
/// startCol, endCol]` stays on its start line. Anything shorter is a bare
/// point with no usable span.
pub fn decode_range(range: &[i32]) -> Option<DecodedRange> {
    match *range {
        [start_line, _, end_line, _, ..] => Some(DecodedRange {
            start_line,
            end_line,
        }),
        [start_line, _, _] => Some(DecodedRange {
            start_line,
            end_line: start_line,
        }),
        _ => None,
    }
}

fn has_role(
    roles: i32,
    role: SymbolRole,
) -> bool {
    (roles & role as i32) != 0
}

#[cfg(test)]
#[path = "../../tests/src/range/occurrence_tests.rs"]
mod tests;
