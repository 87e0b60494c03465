use scip::symbol::parse_symbol;
use scip::types::Symbol;

/// Token that marks an implementation block in some SCIP emitters
/// (`... impl Type ...`).
const IMPL_MARKER: &str = "impl";

/// Position of the module token in a global symbol
/// (`<scheme> <manager> <package> <module> <descriptors>`).
const MODULE_TOKEN: usize = 3;

/// A SCIP symbol identifier split into its space-delimited tokens.
///
/// Parsing never fails: identifiers that do not follow the SCIP symbol
/// grammar keep only their tokens and expose fewer fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolId<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
    parsed: Option<Symbol>,
}

impl<'a> SymbolId<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            tokens: raw.split(' ').collect(),
            parsed: parse_symbol(raw).ok(),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Leading token: the scheme of a global symbol, `local` for a local one.
    pub fn scheme(&self) -> &'a str {
        self.tokens[0]
    }

    pub fn is_local(&self) -> bool {
        self.scheme() == "local"
    }

    /// The grammar-level symbol, when the identifier is well formed.
    pub fn symbol(&self) -> Option<&Symbol> {
        self.parsed.as_ref()
    }

    /// The trailing descriptor chain, if the identifier has more than one token.
    pub fn descriptors(&self) -> Option<&'a str> {
        match self.tokens.as_slice() {
            [_, .., last] => Some(*last),
            _ => None,
        }
    }

    /// Short display name.
    ///
    /// Well-formed symbols use the name of their last descriptor. Otherwise
    /// the last non-empty `.` segment of the trailing token is used, and an
    /// identifier without spaces is returned unchanged.
    pub fn name(&self) -> &str {
        if let Some(descriptor) = self.parsed.as_ref().and_then(|symbol| symbol.descriptors.last())
            && !descriptor.name.is_empty()
        {
            return &descriptor.name;
        }
        let Some(descriptors) = self.descriptors() else {
            return self.raw;
        };
        descriptors.rsplit('.').find(|segment| !segment.is_empty()).unwrap_or(descriptors)
    }

    pub fn module(&self) -> Option<&'a str> {
        if self.tokens.len() > MODULE_TOKEN {
            Some(self.tokens[MODULE_TOKEN])
        } else {
            None
        }
    }

    /// The token following the first `impl` marker.
    pub fn impl_container(&self) -> Option<&'a str> {
        let marker = self.tokens.iter().position(|token| *token == IMPL_MARKER)?;
        self.tokens.get(marker + 1).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbol/descriptor_tests.rs"]
mod tests;
