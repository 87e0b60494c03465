pub mod config;
pub mod element;
pub mod error;
pub mod index;
pub mod range;
pub mod source;
pub mod symbol;

pub use config::{LogLevel, Settings, SettingsOverrides};
pub use element::{CodeElement, ConvertStats, Converter};
pub use error::ConvertError;
pub use index::{read_index, write_elements};
pub use range::{LineSpan, RangeError};
pub use source::SourceCache;
pub use symbol::{CodeType, SymbolId};

/// Read the configured index, convert it, and write the element list.
///
/// Returns the statistics of the run; `stats.emitted` is the number of
/// elements written.
pub fn run(settings: &Settings) -> Result<ConvertStats, ConvertError> {
    let index = read_index(&settings.input)?;
    let mut converter =
        Converter::new(SourceCache::new(&settings.source.root)).with_snippets(settings.source.snippets);
    let elements = converter.convert(&index);
    write_elements(&settings.output, &elements)?;
    Ok(converter.stats())
}
