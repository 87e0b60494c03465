use super::RangeError;

/// Find the line that closes the brace block opened at or after `start`.
///
/// Braces are counted per character; comments and string literals are not
/// special-cased. A balance reached on the start line itself does not end
/// the scan, so `fn f() {}` keeps scanning to the next balanced line.
///
/// The scan stops at the first line after `start` whose running count is
/// zero or below. That line only counts as a block end if an opening brace
/// was seen on the way; otherwise there is no block to close and the scan
/// fails, as it does when the end of the file is reached first.
pub fn find_block_end<S: AsRef<str>>(
    lines: &[S],
    start: usize,
) -> Result<usize, RangeError> {
    let mut depth: i64 = 0;
    let mut opened = false;
    for (index, line) in lines.iter().enumerate().skip(start) {
        let (delta, opens) = brace_delta(line.as_ref());
        depth += delta;
        opened |= opens;
        if depth <= 0 && index != start {
            return if opened {
                Ok(index)
            } else {
                Err(RangeError::UnbalancedBlock)
            };
        }
    }
    Err(RangeError::UnbalancedBlock)
}

fn brace_delta(line: &str) -> (i64, bool) {
    line.chars().fold((0, false), |(delta, opens), ch| match ch {
        '{' => (delta + 1, true),
        '}' => (delta - 1, opens),
        _ => (delta, opens),
    })
}

#[cfg(test)]
#[path = "../../tests/src/range/balance_tests.rs"]
mod tests;
