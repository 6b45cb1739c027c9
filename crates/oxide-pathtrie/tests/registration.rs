//! Tests for registration and handler enumeration.

mod common;
use common::*;

use std::collections::HashSet;

use oxide_pathtrie::RouteTrie;

#[test]
fn reregistration_keeps_last_handler() {
    let mut trie = RouteTrie::new();
    trie.add_handler("/a/:x", "first");
    trie.add_handler("/a/:x", "second");
    assert_eq!(handler(&trie, "/a/1"), Some("second"));
    assert_eq!(trie.handlers(), HashSet::from([&"second"]));
}

#[test]
fn reregistration_through_equivalent_template() {
    let mut trie = RouteTrie::new();
    trie.add_handler("/a/b", "first");
    trie.add_handler("a//b/", "second");
    assert_eq!(handler(&trie, "/a/b"), Some("second"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn handlers_complete_regardless_of_order() {
    let routes = [
        ("/", "root"),
        ("/a", "a"),
        ("/a/:x", "ax"),
        ("/a/:x/b", "axb"),
        ("/c/*", "c"),
        ("/date/:year/:month/:day", "date"),
    ];
    let expected: HashSet<&str> = routes.iter().map(|(_, h)| *h).collect();

    let forward = RouteTrie::from_pairs(routes);
    let backward = RouteTrie::from_pairs(routes.into_iter().rev());

    for trie in [forward, backward] {
        let found: HashSet<&str> = trie.handlers().into_iter().copied().collect();
        assert_eq!(found, expected);
        assert_eq!(trie.len(), routes.len());
    }
}

#[test]
fn wildcard_and_plain_template_share_node() {
    let mut trie = RouteTrie::new();
    trie.add_handler("/files/*", "wild");
    trie.add_handler("/files", "plain");
    // Both end on `files`; the later one owns the node, which is still a
    // wildcard node.
    assert_eq!(handler(&trie, "/files"), Some("plain"));
    assert_eq!(handler(&trie, "/files/a/b"), Some("plain"));
    assert_eq!(trie.handlers().len(), 1);
}

#[test]
fn extend_adds_routes() {
    let mut trie = date_trie();
    trie.extend([("/health", "health")]);
    assert_eq!(handler(&trie, "/health"), Some("health"));
    assert_eq!(handler(&trie, "/date/2012/12/25"), Some("by_date"));
}

#[test]
fn collect_from_iterator() {
    let trie: RouteTrie<u32> = vec![("/one".to_string(), 1), ("/two".to_string(), 2)]
        .into_iter()
        .collect();
    assert_eq!(trie.lookup("/two").map(|m| *m.handler()), Some(2));
}

#[test]
fn shared_across_threads() {
    let trie = std::sync::Arc::new(date_trie());
    let workers: Vec<_> = (0..4)
        .map(|i| {
            let trie = std::sync::Arc::clone(&trie);
            std::thread::spawn(move || {
                let path = format!("/seo/{i}");
                trie.lookup(&path).map(|m| m.values().to_vec())
            })
        })
        .collect();
    for (i, worker) in workers.into_iter().enumerate() {
        assert_eq!(worker.join().unwrap(), Some(vec![i.to_string()]));
    }
}
