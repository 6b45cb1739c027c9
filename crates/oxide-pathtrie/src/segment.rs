//! Path tokenization and template segment classification.

use std::fmt;

/// A segment in a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Matched verbatim against a path segment.
    Literal(&'a str),
    /// Matches any single segment and binds it to the name (e.g. `:id`).
    Variable(&'a str),
    /// Matches the rest of the path (`*`).
    Wildcard,
}

impl<'a> Segment<'a> {
    /// Classifies a single template segment.
    ///
    /// - `*` is a wildcard
    /// - `:name` is a variable called `name`
    /// - anything else, including a lone `:`, is a literal
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_pathtrie::Segment;
    ///
    /// assert_eq!(Segment::parse(":year"), Segment::Variable("year"));
    /// assert_eq!(Segment::parse("*"), Segment::Wildcard);
    /// assert_eq!(Segment::parse("date"), Segment::Literal("date"));
    /// ```
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        if text == "*" {
            return Self::Wildcard;
        }
        match text.strip_prefix(':') {
            Some(name) if !name.is_empty() => Self::Variable(name),
            _ => Self::Literal(text),
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Variable(name) => write!(f, ":{name}"),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

/// Splits templates and paths into segments.
///
/// The trie drops empty segments after tokenizing, so implementations do
/// not need to filter them.
pub trait Tokenizer: Send + Sync {
    /// Splits `path` into its segments, in order.
    fn tokenize<'a>(&self, path: &'a str) -> Vec<&'a str>;
}

/// The default tokenizer: splits on `/`.
///
/// Leading, trailing and repeated slashes produce no segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlashTokenizer;

impl Tokenizer for SlashTokenizer {
    fn tokenize<'a>(&self, path: &'a str) -> Vec<&'a str> {
        path.split('/').filter(|s| !s.is_empty()).collect()
    }
}

/// Adapts a closure into a [`Tokenizer`].
///
/// # Example
///
/// ```
/// use oxide_pathtrie::{FnTokenizer, Tokenizer};
///
/// let dotted = FnTokenizer::new(|path: &str| path.split('.').collect());
/// assert_eq!(dotted.tokenize("a.b.c"), vec!["a", "b", "c"]);
/// ```
pub struct FnTokenizer<F> {
    split: F,
}

impl<F> FnTokenizer<F>
where
    F: for<'a> Fn(&'a str) -> Vec<&'a str> + Send + Sync,
{
    /// Wraps `split` as a tokenizer.
    pub const fn new(split: F) -> Self {
        Self { split }
    }
}

impl<F> Tokenizer for FnTokenizer<F>
where
    F: for<'a> Fn(&'a str) -> Vec<&'a str> + Send + Sync,
{
    fn tokenize<'a>(&self, path: &'a str) -> Vec<&'a str> {
        (self.split)(path)
    }
}

impl<F> fmt::Debug for FnTokenizer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTokenizer").finish_non_exhaustive()
    }
}
