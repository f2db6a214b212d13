//! Configuration schema definitions.
//!
//! This module defines the route table file format. All types derive Serde
//! traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration: routing rules plus logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RouteTableConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Routing rules, applied in file order.
    pub routes: Vec<RouteConfig>,
}

/// One routing rule: every host × path pattern resolves to `service`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Service identifier stored in the table.
    pub service: String,

    /// Hosts the path patterns apply to.
    #[serde(default)]
    pub hosts: Vec<String>,

    /// Path patterns. `/*` and `/**` segments are wildcards; a pattern
    /// starting with `//` applies regardless of host.
    #[serde(default)]
    pub paths: Vec<String>,
}

impl RouteConfig {
    pub fn new(
        service: impl Into<String>,
        hosts: impl IntoIterator<Item = impl Into<String>>,
        paths: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            service: service.into(),
            hosts: hosts.into_iter().map(Into::into).collect(),
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (e.g. "info", "route_resolver=debug").
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Full,
        }
    }
}
