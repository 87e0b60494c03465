use std::fmt::{Display, Formatter};

use super::{DecodedRange, RangeError, find_block_end};

/// A validated, 0-based, inclusive line span inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    /// 1-based first line of the span.
    pub fn line_from(&self) -> u32 {
        to_line_number(self.start)
    }

    /// 1-based last line of the span.
    pub fn line_to(&self) -> u32 {
        to_line_number(self.end)
    }
}

/// A correction applied while normalizing a decoded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeAdjustment {
    NegativeStart {
        start: i64,
    },
    InvertedEnd {
        end: i64,
        start: usize,
    },
    UnbalancedFallback {
        start: usize,
    },
    EndPastEof {
        end: usize,
        last: usize,
    },
}

impl RangeAdjustment {
    /// Whether the adjustment points at bad index data rather than a
    /// construct the brace scan could not close.
    pub fn is_anomaly(&self) -> bool {
        !matches!(self, Self::UnbalancedFallback { .. })
    }
}

impl Display for RangeAdjustment {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::NegativeStart {
                start,
            } => write!(f, "start line index {start} is negative, clamped to 0"),
            Self::InvertedEnd {
                end,
                start,
            } => write!(f, "end line index {end} precedes start {start}, clamped to start"),
            Self::UnbalancedFallback {
                start,
            } => write!(f, "no closing brace after line index {start}, span limited to the start line"),
            Self::EndPastEof {
                end,
                last,
            } => write!(f, "end line index {end} exceeds the file, clamped to {last}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    pub span: LineSpan,
    pub adjustments: Vec<RangeAdjustment>,
}

/// Resolve a decoded range against the lines of its source file.
///
/// Same-line ranges are widened with [`find_block_end`]; when no block end
/// is found the span stays on the start line. The end is clamped to the
/// last line of the file.
pub fn resolve<S: AsRef<str>>(
    decoded: DecodedRange,
    lines: &[S],
) -> Result<ResolvedRange, RangeError> {
    let (start, mut end, mut adjustments) = normalize(decoded)?;
    let line_count = lines.len();
    if start >= line_count {
        return Err(RangeError::StartPastEof {
            start,
            line_count,
        });
    }

    if start == end {
        end = match find_block_end(lines, start) {
            Ok(block_end) => block_end,
            Err(_) => {
                adjustments.push(RangeAdjustment::UnbalancedFallback {
                    start,
                });
                start
            },
        };
    }

    if end >= line_count {
        let last = line_count - 1;
        adjustments.push(RangeAdjustment::EndPastEof {
            end,
            last,
        });
        end = last;
    }

    let span = validate(start, end, line_count)?;
    Ok(ResolvedRange {
        span,
        adjustments,
    })
}

/// Resolve a decoded range without access to its source text.
///
/// Only the index data is used: no brace scan and no end-of-file clamp.
pub fn resolve_detached(decoded: DecodedRange) -> Result<ResolvedRange, RangeError> {
    let (start, end, adjustments) = normalize(decoded)?;
    Ok(ResolvedRange {
        span: LineSpan {
            start,
            end,
        },
        adjustments,
    })
}

fn normalize(decoded: DecodedRange) -> Result<(usize, usize, Vec<RangeAdjustment>), RangeError> {
    if decoded.start_line == 0 && decoded.end_line == 0 {
        return Err(RangeError::InvalidRange);
    }

    let mut adjustments = Vec::new();
    let mut start = i64::from(decoded.start_line) - 1;
    let mut end = i64::from(decoded.end_line) - 1;

    if start < 0 {
        adjustments.push(RangeAdjustment::NegativeStart {
            start,
        });
        start = 0;
    }
    if end < start {
        adjustments.push(RangeAdjustment::InvertedEnd {
            end,
            start: start as usize,
        });
        end = start;
    }

    Ok((start as usize, end as usize, adjustments))
}

fn validate(
    start: usize,
    end: usize,
    line_count: usize,
) -> Result<LineSpan, RangeError> {
    if end < start || end >= line_count {
        return Err(RangeError::OutOfBounds {
            start,
            end,
            line_count,
        });
    }
    Ok(LineSpan {
        start,
        end,
    })
}

fn to_line_number(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |index| index.saturating_add(1))
}

#[cfg(test)]
#[path = "../../tests/src/range/resolver_tests.rs"]
mod tests;
