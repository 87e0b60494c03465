// ── SourceText ──────────────────────────────────────────────────────────────

/// Full text of one source file with pre-computed line boundaries.
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    /// Byte offset where each line starts.
    line_offsets: Vec<usize>,
}

impl SourceText {
    pub fn new(text: String) -> Self {
        let line_offsets = Self::compute_line_offsets(&text);
        Self {
            text,
            line_offsets,
        }
    }

    // ── queries ─────────────────────────────────────────────────────────

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines, counting a trailing empty line after a final `\n`.
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Return the text of a 0-based line without its line terminator.
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_offsets.get(line)?;
        let end = self.line_offsets.get(line + 1).copied().unwrap_or(self.text.len());
        let slice = &self.text[start..end];
        Some(slice.trim_end_matches('\n').trim_end_matches('\r'))
    }

    /// All lines in order, without line terminators.
    pub fn lines(&self) -> Vec<&str> {
        (0..self.line_count()).filter_map(|line| self.line_text(line)).collect()
    }

    // ── internal helpers ────────────────────────────────────────────────

    fn compute_line_offsets(text: &str) -> Vec<usize> {
        let mut offsets = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(i + 1);
            }
        }
        offsets
    }
}

#[cfg(test)]
#[path = "../../tests/src/source/text_tests.rs"]
mod tests;
