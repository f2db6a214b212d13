//! Shared utilities for integration tests.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);

/// Route table used across integration tests.
#[allow(dead_code)]
pub const GATEWAY_ROUTES: &str = r#"
[[routes]]
service = "storefront"
hosts = ["shop.example.com"]
paths = ["/**"]

[[routes]]
service = "orders"
hosts = ["shop.example.com"]
paths = ["/orders/**", "/cart"]

[[routes]]
service = "orders-canary"
hosts = ["kpishop.example.com"]
paths = ["/orders/**"]

[[routes]]
service = "health"
hosts = ["shop.example.com"]
paths = ["//healthz"]
"#;

/// Write `content` to a fresh file under the system temp dir.
pub fn write_config(content: &str) -> PathBuf {
    let n = NEXT_FILE.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("route-resolver-{}-{}", std::process::id(), n));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("routes.toml");
    fs::write(&path, content).unwrap();
    path
}
