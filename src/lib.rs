//! Host + path route resolution for reverse proxies and API gateways.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouteTableConfig;
pub use routing::{PathTrie, RouteResolver, RouteTable, SharedRouteTable};
