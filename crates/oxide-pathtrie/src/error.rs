//! Error types for the path trie.
//!
//! Registration and lookup never fail; these errors come from the
//! surrounding surface (flat construction, route tables, variable access).

use thiserror::Error;

/// Path trie errors.
#[derive(Debug, Error)]
pub enum TrieError {
    /// A flat template/handler list had an odd number of items.
    #[error("flat route list has odd length {len}, every template needs a handler")]
    OddArity { len: usize },

    /// A required path variable was not captured.
    #[error("missing path variable: {0}")]
    MissingVariable(String),

    /// Reading a route table failed.
    #[error("failed to read route table: {0}")]
    Io(#[from] std::io::Error),

    /// A route table was not valid JSON or had the wrong shape.
    #[error("invalid route table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for path trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
