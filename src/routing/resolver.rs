//! Host + path route resolution on top of the path trie.
//!
//! # Responsibilities
//! - Flatten (hosts, path patterns, service) rules into trie entries
//! - Resolve a composed `host/path` key to a service
//! - Let `kpi`-prefixed hosts override or inherit their base host's rules
//!
//! # Key layout
//! ```text
//! register(["shop.com"], ["/a/**"], svc)  → put("/shop.com/a/**", svc)
//! register(["shop.com"], ["//ping"], svc) → put("/ping", svc)   (host independent)
//! match_service("shop.com/a/b")           → get("/shop.com/a/b")
//! ```

use crate::routing::trie::PathTrie;

/// Host prefix whose rules fall back to the unprefixed host.
pub const KPI_PREFIX: &str = "kpi";

/// Resolves request keys to registered services.
#[derive(Debug, Clone)]
pub struct RouteResolver<V> {
    trie: PathTrie<V>,
}

impl<V> Default for RouteResolver<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RouteResolver<V> {
    pub fn new() -> Self {
        Self {
            trie: PathTrie::new(),
        }
    }

    /// Register `value` for every host × path combination.
    ///
    /// A path starting with `//` is host independent: one leading slash is
    /// dropped and the rest is inserted as is. Returns `false` without
    /// touching the table when `hosts` or `paths` is empty.
    pub fn register<S: AsRef<str>>(&mut self, hosts: &[S], paths: &[S], value: V) -> bool
    where
        V: Clone,
    {
        if hosts.is_empty() || paths.is_empty() {
            tracing::warn!(
                hosts = hosts.len(),
                paths = paths.len(),
                "Rejected route registration without hosts or paths"
            );
            return false;
        }

        for key in Self::rule_keys(hosts, paths) {
            let added = self.trie.put(&key, value.clone());
            tracing::debug!(key = %key, replaced = !added, "Route registered");
        }
        true
    }

    /// Remove the entries a matching `register` call would have created.
    ///
    /// Returns `false` for empty inputs, otherwise whether any of the keys
    /// existed in the table.
    pub fn unregister<S: AsRef<str>>(&mut self, hosts: &[S], paths: &[S]) -> bool {
        if hosts.is_empty() || paths.is_empty() {
            return false;
        }

        let mut found = false;
        for key in Self::rule_keys(hosts, paths) {
            if self.trie.delete(&key) {
                tracing::debug!(key = %key, "Route removed");
                found = true;
            }
        }
        found
    }

    /// Find the service owning `key` (`host` immediately followed by the path).
    ///
    /// For `kpi`-prefixed hosts the full key is tried first, then the key
    /// with the prefix removed.
    pub fn match_service(&self, key: &str) -> Option<&V> {
        if key.starts_with(KPI_PREFIX) {
            if let Some(value) = self.trie.get(&format!("/{key}")) {
                return Some(value);
            }
        }
        let base = key.strip_prefix(KPI_PREFIX).unwrap_or(key);
        self.trie.get(&format!("/{base}"))
    }

    pub fn trie(&self) -> &PathTrie<V> {
        &self.trie
    }

    fn rule_keys<'a, S: AsRef<str>>(
        hosts: &'a [S],
        paths: &'a [S],
    ) -> impl Iterator<Item = String> + 'a {
        let (rooted, hosted): (Vec<&str>, Vec<&str>) = paths
            .iter()
            .map(AsRef::<str>::as_ref)
            .partition(|path| path.starts_with("//"));

        let rooted = rooted.into_iter().map(|path| path[1..].to_string());
        let hosted = hosts.iter().flat_map(move |host| {
            let host: &str = host.as_ref();
            hosted
                .clone()
                .into_iter()
                .map(move |path| format!("/{host}{path}"))
        });
        rooted.chain(hosted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Layered wildcard rules on one host, plus a kpi-host override.
    fn gateway() -> RouteResolver<u32> {
        let mut util = RouteResolver::new();
        util.register(&["b.example.com"], &["/**"], 1);
        util.register(&["b.example.com"], &["/aa/**"], 2);
        util.register(&["b.example.com"], &["/aa/ab/**"], 3);
        util.register(&["b.example.com"], &["/aa/ab"], 4);
        util.register(&["kpib.example.com"], &["/aa/**"], 5);
        util.register(&["b.example.com"], &["/aa/ab/ac/**", "//aaa"], 6);
        util
    }

    #[test]
    fn test_gateway_rules() {
        let util = gateway();
        let cases = [
            ("b.example.com/aa", 1),
            ("b.example.com/ab", 1),
            ("kpib.example.com/ab", 1),
            ("b.example.com/aa/ac", 2),
            ("kpib.example.com/aa/ac", 5),
            ("b.example.com/aa/ab", 4),
            ("b.example.com/aa/ab/ac", 3),
            ("b.example.com/aa/ab?sfaf=sda&asd=23", 4),
            ("b.example.com/aa/ab/ac/ad", 6),
            ("aaa", 6),
        ];
        for (key, expected) in cases {
            assert_eq!(util.match_service(key), Some(&expected), "key {key}");
        }
    }

    #[test]
    fn test_cross_product() {
        let mut util = RouteResolver::new();
        assert!(util.register(&["a.com", "b.com"], &["/x", "/y"], "svc"));
        assert_eq!(util.trie().len(), 4);
        for key in ["a.com/x", "a.com/y", "b.com/x", "b.com/y"] {
            assert_eq!(util.match_service(key), Some(&"svc"));
        }
    }

    #[test]
    fn test_rooted_path_ignores_hosts() {
        let mut util = RouteResolver::new();
        util.register(&["a.com", "b.com"], &["//health"], 9);
        assert_eq!(util.trie().len(), 1);
        assert_eq!(util.match_service("health"), Some(&9));
        assert_eq!(util.match_service("a.com/health"), None);
    }

    #[test]
    fn test_empty_registration_rejected() {
        let mut util = RouteResolver::new();
        util.register(&["h"], &["/x"], 1);

        let none: [&str; 0] = [];
        assert!(!util.register(&none, &["/x"], 2));
        assert!(!util.register(&["h"], &none, 2));
        assert_eq!(util.match_service("h/x"), Some(&1));
        assert_eq!(util.trie().len(), 1);
    }

    #[test]
    fn test_kpi_prefers_own_rule() {
        let mut util = RouteResolver::new();
        util.register(&["example.com"], &["/p"], "base");
        assert_eq!(util.match_service("kpiexample.com/p"), Some(&"base"));

        util.register(&["kpiexample.com"], &["/p"], "kpi");
        assert_eq!(util.match_service("kpiexample.com/p"), Some(&"kpi"));
        assert_eq!(util.match_service("example.com/p"), Some(&"base"));
    }

    #[test]
    fn test_unregister() {
        let mut util = RouteResolver::new();
        util.register(&["a.com"], &["/x", "/y/**", "//z"], 1);
        assert!(util.unregister(&["a.com"], &["/y/**", "//z"]));
        assert_eq!(util.match_service("a.com/x"), Some(&1));
        assert_eq!(util.match_service("a.com/y/q"), None);
        assert_eq!(util.match_service("z"), None);
        assert!(!util.unregister(&["a.com"], &["/nope"]));
        assert!(!util.unregister::<&str>(&[], &["/x"]));
    }
}
