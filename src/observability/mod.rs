//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, config subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//! ```

pub mod logging;
pub mod metrics;
