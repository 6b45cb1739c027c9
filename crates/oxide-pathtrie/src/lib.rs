//! # oxide-pathtrie
//!
//! Maps slash-delimited path templates to handler values and resolves
//! concrete paths back to the handler and its captured variables.
//!
//! This crate provides:
//! - A trie keyed by path segment, so lookup cost follows path depth
//! - Named variable segments (`:name`)
//! - Trailing wildcards (`*`) that capture the rest of the path
//! - Pluggable tokenizers and a partial-match lookup mode
//! - JSON route tables
//!
//! ## Quick Start
//!
//! ```
//! use oxide_pathtrie::RouteTrie;
//!
//! let trie = RouteTrie::from_pairs([
//!     ("/date/:year/:month/:day", "by_date"),
//!     ("/date/:year/:day/:month/US", "by_us_date"),
//!     ("/seo/*", "seo"),
//! ]);
//!
//! let m = trie.lookup("/date/2012/25/12/US").unwrap();
//! assert_eq!(*m.handler(), "by_us_date");
//! assert_eq!(m.variables().get("month"), Some("12"));
//!
//! assert!(trie.lookup("/date/2012/25/12/UK").is_none());
//! ```
//!
//! ## Template Syntax
//!
//! - Empty segments are ignored: `/a//b/` is the same as `a/b`
//! - `:name` matches any one segment and binds it to `name`
//! - `*` matches all remaining segments; anything after it is ignored
//! - Everything else matches verbatim, case-sensitively
//!
//! At every node a literal child is tried first, then the wildcard, then
//! the variable child. Lookup never backtracks.
//!
//! ## Route Tables
//!
//! ```
//! use oxide_pathtrie::{RouteTable, TrieConfig};
//!
//! let table = RouteTable::from_json_str(
//!     r#"{"routes": [{"template": "/users/:id", "handler": "user"}]}"#,
//! )
//! .unwrap();
//! let trie = table.build(TrieConfig::default());
//! assert_eq!(trie.lookup("/users/7").unwrap().handler(), "user");
//! ```

mod config;
mod error;
mod matched;
mod segment;
mod table;
mod trie;

pub use config::{LookupMode, TrieConfig};
pub use error::{Result, TrieError};
pub use matched::{Match, Variables};
pub use segment::{FnTokenizer, Segment, SlashTokenizer, Tokenizer};
pub use table::{RouteEntry, RouteTable};
pub use trie::RouteTrie;
