//! Hot reload: file change → watcher → shared table swap.

use std::fs;
use std::time::Duration;

use route_resolver::config::{load_config, watcher::ConfigWatcher};
use route_resolver::{RouteTable, SharedRouteTable};

mod common;

#[tokio::test]
async fn test_reload_on_file_change() {
    let path = common::write_config(common::GATEWAY_ROUTES);
    let shared = SharedRouteTable::new(RouteTable::from_config(&load_config(&path).unwrap()));
    assert_eq!(shared.load().resolve_key("shop.example.com/cart"), Some("orders"));

    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _watcher = watcher.run().unwrap();

    fs::write(
        &path,
        r#"
        [[routes]]
        service = "cart-v2"
        hosts = ["shop.example.com"]
        paths = ["/cart"]
        "#,
    )
    .unwrap();

    // A write can surface as several events; wait for the complete file.
    let reloaded = tokio::time::timeout(Duration::from_secs(10), async {
        while let Some(config) = updates.recv().await {
            if !config.routes.is_empty() {
                return Some(config);
            }
        }
        None
    })
    .await
    .expect("no reload within timeout")
    .expect("watcher channel closed");

    shared.reload(&reloaded);
    let table = shared.load();
    assert_eq!(table.resolve_key("shop.example.com/cart"), Some("cart-v2"));
    assert_eq!(table.resolve_key("shop.example.com/orders/1"), None);
}

#[tokio::test]
async fn test_invalid_change_keeps_current_table() {
    let path = common::write_config(common::GATEWAY_ROUTES);
    let shared = SharedRouteTable::new(RouteTable::from_config(&load_config(&path).unwrap()));

    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _watcher = watcher.run().unwrap();

    fs::write(&path, "[[routes]]\nservice = \"broken\"\nhosts = [\"a.com\"]\npaths = [\"nope\"]\n")
        .unwrap();

    let update = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            match updates.recv().await {
                Some(config) if !config.routes.is_empty() => return Some(config),
                Some(_) => continue,
                None => return None,
            }
        }
    })
    .await;
    assert!(update.is_err(), "invalid config must not be published");
    assert_eq!(shared.load().resolve_key("shop.example.com/cart"), Some("orders"));
}
