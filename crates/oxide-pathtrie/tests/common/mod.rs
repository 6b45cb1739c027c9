#![allow(dead_code)]

use oxide_pathtrie::{RouteTrie, Variables};

/// The date routes used across the lookup tests.
pub fn date_trie() -> RouteTrie<&'static str> {
    RouteTrie::from_pairs([
        ("/date/:year/:month/:day", "by_date"),
        ("/date/:year/:day/:month/US", "by_us_date"),
        ("/seo/*", "seo"),
    ])
}

pub fn handler(trie: &RouteTrie<&'static str>, path: &str) -> Option<&'static str> {
    trie.lookup(path).map(|m| *m.handler())
}

pub fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs.iter().copied().collect()
}

pub fn lookup_vars(trie: &RouteTrie<&'static str>, path: &str) -> Variables {
    trie.lookup(path)
        .unwrap_or_else(|| panic!("Expected a match for: {path}"))
        .variables()
}
