//! Route tables loaded from JSON.
//!
//! A route table is a list of `(template, handler)` entries with string
//! handler names:
//!
//! ```json
//! {
//!   "routes": [
//!     { "template": "/date/:year/:month/:day", "handler": "date" },
//!     { "template": "/seo/*", "handler": "seo" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TrieConfig;
use crate::error::Result;
use crate::trie::RouteTrie;

/// A single route table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// The path template.
    pub template: String,
    /// The handler name.
    pub handler: String,
}

impl RouteEntry {
    /// Creates a new entry.
    pub fn new(template: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            handler: handler.into(),
        }
    }
}

/// An ordered list of routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Entries in registration order.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Creates an empty route table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    #[must_use]
    pub fn route(mut self, template: impl Into<String>, handler: impl Into<String>) -> Self {
        self.routes.push(RouteEntry::new(template, handler));
        self
    }

    /// Parses a route table from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a route table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        info!("Loaded {} routes from {}", table.routes.len(), path.display());
        Ok(table)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Builds a trie, registering entries in table order so that later
    /// entries replace earlier ones with the same template.
    #[must_use]
    pub fn build(&self, config: TrieConfig) -> RouteTrie<String> {
        let mut trie = RouteTrie::with_config(config);
        for entry in &self.routes {
            debug!(template = %entry.template, handler = %entry.handler, "registering route");
            trie.add_handler(&entry.template, entry.handler.clone());
        }
        trie
    }
}
