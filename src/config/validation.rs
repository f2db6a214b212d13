//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject rules the resolver would refuse (no hosts, no paths)
//! - Validate path pattern shape
//! - Detect rules declared twice
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteTableConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouteTableConfig;

/// A semantic problem in one route rule. `route` is the rule's index.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route #{route}: service name is empty")]
    EmptyService { route: usize },

    #[error("route #{route} ({service}): no hosts")]
    NoHosts { route: usize, service: String },

    #[error("route #{route} ({service}): no paths")]
    NoPaths { route: usize, service: String },

    #[error("route #{route} ({service}): empty host")]
    EmptyHost { route: usize, service: String },

    #[error("route #{route} ({service}): path {path:?} must start with '/'")]
    InvalidPath {
        route: usize,
        service: String,
        path: String,
    },

    #[error("route #{route} ({service}): {host}{path} already declared")]
    DuplicateRule {
        route: usize,
        service: String,
        host: String,
        path: String,
    },
}

/// Check every rule, collecting all problems found.
pub fn validate_config(config: &RouteTableConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (route, rule) in config.routes.iter().enumerate() {
        let service = rule.service.clone();
        if service.trim().is_empty() {
            errors.push(ValidationError::EmptyService { route });
        }
        if rule.hosts.is_empty() {
            errors.push(ValidationError::NoHosts { route, service: service.clone() });
        }
        if rule.paths.is_empty() {
            errors.push(ValidationError::NoPaths { route, service: service.clone() });
        }
        if rule.hosts.iter().any(|h| h.trim().is_empty()) {
            errors.push(ValidationError::EmptyHost { route, service: service.clone() });
        }
        for path in &rule.paths {
            if !path.starts_with('/') {
                errors.push(ValidationError::InvalidPath {
                    route,
                    service: service.clone(),
                    path: path.clone(),
                });
            }
        }

        for host in &rule.hosts {
            for path in &rule.paths {
                if !seen.insert((rule.service.as_str(), host.as_str(), path.as_str())) {
                    errors.push(ValidationError::DuplicateRule {
                        route,
                        service: service.clone(),
                        host: host.clone(),
                        path: path.clone(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
