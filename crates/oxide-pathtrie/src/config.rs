//! Lookup strategy configuration.

use std::fmt;
use std::sync::Arc;

use crate::segment::{SlashTokenizer, Tokenizer};

/// How a lookup treats a path that runs past the end of the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Only paths that reach a node with a handler match.
    #[default]
    Standard,
    /// Like [`LookupMode::Standard`], but when no branch accepts the next
    /// segment and the current node has a handler, match that node and
    /// hand back the unconsumed segments as the remainder.
    ///
    /// A path that is exhausted on a node without a handler still fails.
    AllowPartial,
}

/// Strategy passed to a [`RouteTrie`](crate::RouteTrie) at construction.
///
/// # Example
///
/// ```
/// use oxide_pathtrie::{LookupMode, RouteTrie, TrieConfig};
///
/// let config = TrieConfig::new().mode(LookupMode::AllowPartial);
/// let mut trie = RouteTrie::with_config(config);
/// trie.add_handler("/static", "assets");
///
/// let m = trie.lookup("/static/css/site.css").unwrap();
/// assert_eq!(*m.handler(), "assets");
/// assert_eq!(m.remainder(), ["css", "site.css"]);
/// ```
#[derive(Clone)]
pub struct TrieConfig {
    tokenizer: Arc<dyn Tokenizer>,
    mode: LookupMode,
}

impl TrieConfig {
    /// Creates the default configuration: slash tokenizer, standard lookup.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Arc::new(SlashTokenizer),
            mode: LookupMode::Standard,
        }
    }

    /// Replaces the tokenizer used for templates and paths.
    #[must_use]
    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    /// Sets the lookup mode.
    #[must_use]
    pub const fn mode(mut self, mode: LookupMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the lookup mode.
    #[must_use]
    pub const fn lookup_mode(&self) -> LookupMode {
        self.mode
    }

    /// Tokenizes `path`, dropping empty segments.
    pub(crate) fn segments<'a>(&self, path: &'a str) -> Vec<&'a str> {
        let mut segments = self.tokenizer.tokenize(path);
        segments.retain(|s| !s.is_empty());
        segments
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrieConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieConfig")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
