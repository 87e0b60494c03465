//! Symbol metadata: kind labels, identifier parsing and element context.

mod context;
mod descriptor;
mod kind;

pub use context::{
    Context, FILE_NAME_KEY, FILE_PATH_KEY, MODULE_KEY, SNIPPET_KEY, STRUCT_NAME_KEY, build_context,
};
pub use descriptor::SymbolId;
pub use kind::{CodeType, classify};
