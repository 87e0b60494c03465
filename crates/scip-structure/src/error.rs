use std::path::PathBuf;

/// Failures that abort a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read SCIP file {}: {source}", path.display())]
    ReadIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to unmarshal SCIP index {}: {source}", path.display())]
    DecodeIndex {
        path: PathBuf,
        #[source]
        source: protobuf::Error,
    },
    #[error("failed to create JSON output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write JSON output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration {}: {reason}", path.display())]
    Config {
        path: PathBuf,
        reason: String,
    },
}
