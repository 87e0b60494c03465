use std::fmt::{Display, Formatter};

use scip::types::{Document, Index, SymbolInformation};
use tracing::{debug, info, warn};

use super::CodeElement;
use crate::range::{
    DecodedRange, RangeError, ResolvedRange, decode_range, extract, find_definition, resolve, resolve_detached,
};
use crate::source::SourceCache;
use crate::symbol::{SymbolId, build_context, classify};

/// Outcome counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub emitted: usize,
    pub filtered: usize,
    pub skipped: usize,
    /// Emitted elements whose source text could not be loaded.
    pub without_source: usize,
}

impl Display for ConvertStats {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{} emitted, {} filtered, {} skipped, {} without source",
            self.emitted, self.filtered, self.skipped, self.without_source
        )
    }
}

/// Turns the documents of a SCIP index into [`CodeElement`]s.
///
/// Owns the run's [`SourceCache`], so each source file is read at most once.
#[derive(Debug)]
pub struct Converter {
    sources: SourceCache,
    snippets: bool,
    stats: ConvertStats,
}

impl Converter {
    pub fn new(sources: SourceCache) -> Self {
        Self {
            sources,
            snippets: true,
            stats: ConvertStats::default(),
        }
    }

    /// Toggle source loading. Without it ranges come from the index alone
    /// and no snippet is attached.
    pub fn with_snippets(
        mut self,
        snippets: bool,
    ) -> Self {
        self.snippets = snippets;
        self
    }

    pub fn stats(&self) -> ConvertStats {
        self.stats
    }

    pub fn sources(&self) -> &SourceCache {
        &self.sources
    }

    /// Convert every symbol of every document, in index order.
    pub fn convert(
        &mut self,
        index: &Index,
    ) -> Vec<CodeElement> {
        let mut elements = Vec::new();
        for document in &index.documents {
            elements.extend(self.convert_document(document));
        }
        info!("Converted {} documents: {}", index.documents.len(), self.stats);
        elements
    }

    pub fn convert_document(
        &mut self,
        document: &Document,
    ) -> Vec<CodeElement> {
        let mut elements = Vec::new();
        for symbol in &document.symbols {
            debug!("Processing symbol: {} in file: {}", symbol.symbol, document.relative_path);
            match self.convert_symbol(document, symbol) {
                Ok(Some(element)) => {
                    self.stats.emitted += 1;
                    elements.push(element);
                },
                Ok(None) => self.stats.filtered += 1,
                Err(error) => {
                    self.stats.skipped += 1;
                    warn!("Skipping symbol {} in {}: {error}", symbol.symbol, document.relative_path);
                },
            }
        }
        elements
    }

    /// Convert one symbol. `Ok(None)` means its kind is not reported.
    pub fn convert_symbol(
        &mut self,
        document: &Document,
        symbol: &SymbolInformation,
    ) -> Result<Option<CodeElement>, RangeError> {
        let code_type = classify(symbol.kind);
        if !code_type.is_known() {
            return Ok(None);
        }

        let occurrence = find_definition(document, &symbol.symbol)?;
        let decoded = decode_range(&occurrence.range).ok_or(RangeError::InvalidRange)?;
        let (resolved, snippet) = self.resolve_with_source(document, decoded)?;
        for adjustment in &resolved.adjustments {
            if adjustment.is_anomaly() {
                warn!("Adjusted range of {}: {adjustment}", symbol.symbol);
            } else {
                debug!("Adjusted range of {}: {adjustment}", symbol.symbol);
            }
        }

        let id = SymbolId::parse(&symbol.symbol);
        let span = resolved.span;
        Ok(Some(CodeElement {
            name: id.name().to_string(),
            signature: symbol.signature_documentation.as_ref().map(|doc| doc.text.clone()).unwrap_or_default(),
            code_type,
            docstring: symbol.documentation.join("\n"),
            line: span.line_from(),
            line_from: span.line_from(),
            line_to: span.line_to(),
            context: build_context(&document.relative_path, &id, snippet.as_deref()),
        }))
    }

    fn resolve_with_source(
        &mut self,
        document: &Document,
        decoded: DecodedRange,
    ) -> Result<(ResolvedRange, Option<String>), RangeError> {
        if !self.snippets {
            return Ok((resolve_detached(decoded)?, None));
        }

        match self.sources.text_for(document) {
            Ok(source) => {
                let lines = source.lines();
                let resolved = resolve(decoded, &lines)?;
                let snippet = extract(&lines, resolved.span);
                Ok((resolved, Some(snippet)))
            },
            Err(error) => {
                warn!("Could not extract snippet from {}: {error}", document.relative_path);
                let resolved = resolve_detached(decoded)?;
                self.stats.without_source += 1;
                Ok((resolved, None))
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/element/converter_tests.rs"]
mod tests;
