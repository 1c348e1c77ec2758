use std::path::PathBuf;

/// Errors raised while configuring an engine.
///
/// Parsing text never fails; everything here surfaces while rules are being
/// registered or selected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule's pattern did not compile.
    #[error("invalid pattern for rule `{name}`: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// Strict selection was given names that are not in the catalog.
    #[error("unknown rule name(s): {}", .0.join(", "))]
    UnknownRules(Vec<String>),

    #[error("`only` and `except` cannot both be set")]
    ConflictingSelection,

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
