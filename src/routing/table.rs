//! Route table built from configuration.
//!
//! # Responsibilities
//! - Compile validated route rules into a `RouteResolver<String>`
//! - Resolve request host + path to a service name
//! - Publish rebuilt tables to concurrent readers
//!
//! # Design Decisions
//! - A table is immutable once built; reload builds a new one
//! - Readers never lock: `SharedRouteTable` swaps whole tables via `ArcSwap`
//! - Rules apply in file order, so a later rule overrides an identical key

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::RouteTableConfig;
use crate::observability::metrics;
use crate::routing::resolver::RouteResolver;

/// Compiled, read-only route table.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    resolver: RouteResolver<String>,
    rules: usize,
}

impl RouteTable {
    /// Build a table from validated configuration.
    pub fn from_config(config: &RouteTableConfig) -> Self {
        let mut resolver = RouteResolver::new();
        let mut rules = 0;

        for route in &config.routes {
            let (hosts, paths) = (route.hosts.as_slice(), route.paths.as_slice());
            if resolver.register(hosts, paths, route.service.clone()) {
                rules += 1;
            } else {
                tracing::warn!(service = %route.service, "Skipping route without hosts or paths");
            }
        }

        let table = Self { resolver, rules };
        tracing::debug!(rules = table.rules, entries = table.entries(), "Route table compiled");
        table
    }

    /// Resolve a request's host and path (query string allowed).
    pub fn resolve(&self, host: &str, path: &str) -> Option<&str> {
        self.resolve_key(&format!("{host}{path}"))
    }

    /// Resolve a pre-composed `host/path` key.
    pub fn resolve_key(&self, key: &str) -> Option<&str> {
        let service = self.resolver.match_service(key).map(String::as_str);
        metrics::record_lookup(service.is_some());
        tracing::trace!(key = %key, service = ?service, "Route lookup");
        service
    }

    /// Number of rules registered.
    pub fn rules(&self) -> usize {
        self.rules
    }

    /// Number of trie entries the rules flattened into.
    pub fn entries(&self) -> usize {
        self.resolver.trie().len()
    }
}

/// Route table handle shared between lookups and reloads.
#[derive(Debug)]
pub struct SharedRouteTable {
    current: ArcSwap<RouteTable>,
}

impl SharedRouteTable {
    pub fn new(table: RouteTable) -> Self {
        metrics::record_table_entries(table.entries());
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    /// Snapshot of the live table; unaffected by later swaps.
    pub fn load(&self) -> Arc<RouteTable> {
        self.current.load_full()
    }

    /// Build a table from `config` and make it live.
    pub fn reload(&self, config: &RouteTableConfig) {
        let table = RouteTable::from_config(config);
        tracing::info!(rules = table.rules(), entries = table.entries(), "Route table reloaded");
        metrics::record_table_entries(table.entries());
        metrics::record_reload("applied");
        self.current.store(Arc::new(table));
    }
}
