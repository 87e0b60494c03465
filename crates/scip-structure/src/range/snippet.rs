use super::LineSpan;

/// Join the lines covered by `span`.
///
/// `span` must come from [`super::resolve`] against the same `lines`.
pub fn extract<S: AsRef<str>>(
    lines: &[S],
    span: LineSpan,
) -> String {
    debug_assert!(span.start <= span.end && span.end < lines.len(), "unvalidated span {span:?}");
    lines[span.start..=span.end].iter().map(|line| line.as_ref()).collect::<Vec<&str>>().join("\n")
}
