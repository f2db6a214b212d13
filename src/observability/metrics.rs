//! Route table metrics.
//!
//! # Metrics
//! - `route_lookups_total` (counter): lookups by result (hit, miss)
//! - `route_table_entries` (gauge): trie entries in the live table
//! - `route_table_reloads_total` (counter): reloads by outcome (applied, rejected)
//!
//! No exporter is installed here; without a recorder these calls are no-ops.

/// Record one lookup against the live table.
pub fn record_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    metrics::counter!("route_lookups_total", "result" => result).increment(1);
}

/// Record the number of entries in the live table.
pub fn record_table_entries(entries: usize) {
    metrics::gauge!("route_table_entries").set(entries as f64);
}

/// Record a reload attempt.
pub fn record_reload(outcome: &'static str) {
    metrics::counter!("route_table_reloads_total", "outcome" => outcome).increment(1);
}
