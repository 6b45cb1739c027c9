//! The route trie.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::iter;

use tracing::{debug, trace};

use crate::config::{LookupMode, TrieConfig};
use crate::error::{Result, TrieError};
use crate::matched::Match;
use crate::segment::Segment;

/// One template prefix.
#[derive(Debug, Clone)]
pub(crate) struct Node<H> {
    /// Literal segment text to child.
    children: HashMap<String, Node<H>>,
    /// The single child shared by every variable segment at this depth.
    variable_child: Option<Box<Node<H>>>,
    /// Set when some template ends in `*` here.
    is_wildcard: bool,
    /// Handler of the template that ends here.
    pub(crate) target: Option<H>,
    /// Variable names bound from the root down to here, set with `target`.
    pub(crate) variable_names: Vec<String>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            variable_child: None,
            is_wildcard: false,
            target: None,
            variable_names: Vec::new(),
        }
    }
}

/// Maps path templates to handlers.
///
/// Templates are `/`-separated segments. A segment starting with `:` is a
/// variable, `*` matches the rest of the path, and anything else is
/// literal. At each node a lookup prefers a literal child, then a
/// wildcard, then the variable child, and never backtracks, so the cost of
/// a lookup depends only on the depth of the path.
///
/// Registration takes `&mut self` and lookups take `&self`: build the trie
/// first, then share it for reading. Callers that need to register while
/// others read must wrap the trie in their own lock.
///
/// # Example
///
/// ```
/// use oxide_pathtrie::RouteTrie;
///
/// let mut trie = RouteTrie::new();
/// trie.add_handler("/date/:year/:month/:day", "date");
/// trie.add_handler("/seo/*", "seo");
///
/// let m = trie.lookup("/date/2012/12/25").unwrap();
/// assert_eq!(*m.handler(), "date");
/// assert_eq!(m.variables().get("month"), Some("12"));
///
/// let m = trie.lookup("/seo/a/b").unwrap();
/// assert_eq!(m.values(), ["a", "b"]);
///
/// assert!(trie.lookup("/date/2012").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RouteTrie<H> {
    root: Node<H>,
    config: TrieConfig,
}

impl<H> Default for RouteTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTrie<H> {
    /// Creates an empty trie with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates an empty trie with the given configuration.
    #[must_use]
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: Node::default(),
            config,
        }
    }

    /// Creates a trie from `(template, handler)` pairs, registered in order.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, H)>,
        S: AsRef<str>,
    {
        pairs.into_iter().collect()
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Registers `handler` under `template`.
    ///
    /// Registering a template that ends on the same node as an earlier one
    /// replaces the earlier handler and its variable names. Segments after
    /// a `*` are ignored. An empty template registers on the root.
    pub fn add_handler(&mut self, template: &str, handler: H) {
        let segments = self.config.segments(template);
        let mut names = Vec::new();
        let mut node = &mut self.root;

        for text in segments {
            match Segment::parse(text) {
                Segment::Variable(name) => {
                    names.push(name.to_string());
                    node = &mut **node.variable_child.get_or_insert_with(Box::default);
                }
                Segment::Wildcard => {
                    node.is_wildcard = true;
                    break;
                }
                Segment::Literal(literal) => {
                    node = node.children.entry(literal.to_string()).or_default();
                }
            }
        }

        if node.target.is_some() {
            debug!(template, "replacing existing handler");
        }
        node.target = Some(handler);
        node.variable_names = names;
    }

    /// Finds the handler registered for `path`.
    ///
    /// Returns `None` when no template matches, including when `path` is
    /// only a prefix of a registered template.
    pub fn lookup(&self, path: &str) -> Option<Match<'_, H>> {
        let segments = self.config.segments(path);
        let mut rest = segments.iter().copied();
        let mut cursor = &self.root;
        let mut values = Vec::new();

        while let Some(segment) = rest.next() {
            if let Some(child) = cursor.children.get(segment) {
                cursor = child;
            } else if cursor.is_wildcard {
                values.push(segment.to_string());
                values.extend(rest.map(str::to_string));
                return Match::new(cursor, values, Vec::new());
            } else if let Some(child) = cursor.variable_child.as_deref() {
                values.push(segment.to_string());
                cursor = child;
            } else {
                trace!(path, segment, "no branch for segment");
                return match self.config.lookup_mode() {
                    LookupMode::Standard => None,
                    LookupMode::AllowPartial => {
                        let remainder = iter::once(segment)
                            .chain(rest)
                            .map(str::to_string)
                            .collect();
                        Match::new(cursor, values, remainder)
                    }
                };
            }
        }

        Match::new(cursor, values, Vec::new())
    }

    /// Returns the number of templates with a distinct end node.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes().filter(|node| node.target.is_some()).count()
    }

    /// Returns true if no handler has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks every node, in no particular order.
    fn nodes(&self) -> impl Iterator<Item = &Node<H>> {
        let mut stack = vec![&self.root];
        iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values());
            stack.extend(node.variable_child.as_deref());
            Some(node)
        })
    }
}

impl<H: Eq + Hash> RouteTrie<H> {
    /// Returns every registered handler, de-duplicated, in no particular
    /// order.
    #[must_use]
    pub fn handlers(&self) -> HashSet<&H> {
        self.nodes().filter_map(|node| node.target.as_ref()).collect()
    }
}

impl RouteTrie<String> {
    /// Creates a trie from a flat `[template, handler, template, handler, ..]`
    /// list.
    ///
    /// Prefer [`RouteTrie::from_pairs`]; this form exists for route lists
    /// that arrive flattened.
    pub fn from_flat(items: &[&str]) -> Result<Self> {
        if items.len() % 2 != 0 {
            return Err(TrieError::OddArity { len: items.len() });
        }
        Ok(items
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1].to_string()))
            .collect())
    }
}

impl<S: AsRef<str>, H> FromIterator<(S, H)> for RouteTrie<H> {
    fn from_iter<I: IntoIterator<Item = (S, H)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>, H> Extend<(S, H)> for RouteTrie<H> {
    fn extend<I: IntoIterator<Item = (S, H)>>(&mut self, iter: I) {
        for (template, handler) in iter {
            self.add_handler(template.as_ref(), handler);
        }
    }
}
