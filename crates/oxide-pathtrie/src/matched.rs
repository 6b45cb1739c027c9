//! Lookup results.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, TrieError};
use crate::trie::Node;

/// A successful lookup.
///
/// Borrows the handler and variable names from the trie it came from, so
/// it cannot outlive the trie or coexist with a mutation of it.
#[derive(Debug, Clone)]
pub struct Match<'t, H> {
    handler: &'t H,
    names: &'t [String],
    values: Vec<String>,
    remainder: Vec<String>,
}

impl<'t, H> Match<'t, H> {
    /// Builds a match for `node`, or `None` if no template ends there.
    pub(crate) fn new(
        node: &'t Node<H>,
        values: Vec<String>,
        remainder: Vec<String>,
    ) -> Option<Self> {
        let handler = node.target.as_ref()?;
        Some(Self {
            handler,
            names: &node.variable_names,
            values,
            remainder,
        })
    }

    /// Returns the handler the matched template was registered with.
    #[must_use]
    pub const fn handler(&self) -> &'t H {
        self.handler
    }

    /// Returns the captured segments: named variables first, then anything
    /// a wildcard consumed.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the variable names of the matched template, in path order.
    #[must_use]
    pub const fn variable_names(&self) -> &'t [String] {
        self.names
    }

    /// Returns the named variables.
    ///
    /// Wildcard captures are not included; use [`Match::values`] for those.
    /// If a template repeats a variable name, the last occurrence wins.
    #[must_use]
    pub fn variables(&self) -> Variables {
        self.names
            .iter()
            .zip(&self.values)
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    /// Returns the segments left over by a partial match.
    ///
    /// Always empty unless the trie uses
    /// [`LookupMode::AllowPartial`](crate::LookupMode::AllowPartial).
    #[must_use]
    pub fn remainder(&self) -> &[String] {
        &self.remainder
    }

    /// Returns true if the match stopped before the end of the path.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.remainder.is_empty()
    }
}

/// Named variables captured by a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Variables {
    vars: HashMap<String, String>,
}

impl Variables {
    /// Creates an empty set of variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a variable, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Gets a variable value or returns an error.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| TrieError::MissingVariable(name.to_string()))
    }

    /// Parses a variable as a specific type.
    #[must_use]
    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.parse().ok())
    }

    /// Returns true if the variable was captured.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns an iterator over the variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}
