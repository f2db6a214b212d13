//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (host, path?query)
//!     → table.rs (compose key, record lookup)
//!     → resolver.rs (kpi host fallback)
//!     → trie.rs (segment walk, wildcard fallback)
//!     → Return: service or None
//!
//! Route Compilation (at startup and on reload):
//!     RouteConfig[]
//!     → resolver.rs (flatten hosts × paths into keys)
//!     → trie.rs (put per key)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Lookup cost grows with segment count, not rule count
//! - Exact segment beats `/*`, which beats `/**`
//! - Deterministic: same input always matches same route

pub mod resolver;
pub mod segmenter;
pub mod table;
pub mod trie;

pub use resolver::RouteResolver;
pub use segmenter::{char_segmenter, path_segmenter, StringSegmenter};
pub use table::{RouteTable, SharedRouteTable};
pub use trie::PathTrie;
