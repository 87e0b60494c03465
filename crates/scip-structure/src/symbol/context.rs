use std::collections::BTreeMap;
use std::path::Path;

use super::SymbolId;

pub const FILE_PATH_KEY: &str = "file_path";
pub const FILE_NAME_KEY: &str = "file_name";
pub const MODULE_KEY: &str = "module";
pub const STRUCT_NAME_KEY: &str = "struct_name";
pub const SNIPPET_KEY: &str = "snippet";

/// Auxiliary key/value context attached to a code element.
pub type Context = BTreeMap<String, String>;

/// Build the context map for a symbol defined in `relative_path`.
///
/// Optional entries are left out rather than stored as empty strings.
pub fn build_context(
    relative_path: &str,
    symbol: &SymbolId<'_>,
    snippet: Option<&str>,
) -> Context {
    let mut context = Context::new();
    context.insert(FILE_PATH_KEY.to_string(), relative_path.to_string());
    context.insert(FILE_NAME_KEY.to_string(), file_name(relative_path).to_string());

    if let Some(module) = symbol.module() {
        context.insert(MODULE_KEY.to_string(), module.to_string());
    }
    if let Some(container) = symbol.impl_container() {
        context.insert(STRUCT_NAME_KEY.to_string(), container.to_string());
    }
    if let Some(snippet) = snippet.filter(|snippet| !snippet.is_empty()) {
        context.insert(SNIPPET_KEY.to_string(), snippet.to_string());
    }

    context
}

fn file_name(relative_path: &str) -> &str {
    Path::new(relative_path).file_name().and_then(|name| name.to_str()).unwrap_or(relative_path)
}

#[cfg(test)]
#[path = "../../tests/src/symbol/context_tests.rs"]
mod tests;
