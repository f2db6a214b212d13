//! Route table CLI.
//!
//! Loads a TOML route table and answers "which service owns this request?"
//! for `host/path` keys.
//!
//! # Architecture Overview
//!
//! ```text
//!   routes.toml ──▶ config::loader ──▶ config::validation ──▶ RouteTable
//!        │                                                       │
//!        └── config::watcher (watch mode) ── reload ──▶ SharedRouteTable
//!                                                                │
//!   "host/path?query" ──────────────────────────────────▶ resolve_key
//!                                                                │
//!                                                     service or <none>
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tokio::io::{AsyncBufReadExt, BufReader};

use route_resolver::config::load_config;
use route_resolver::config::watcher::ConfigWatcher;
use route_resolver::observability::logging;
use route_resolver::{RouteTable, SharedRouteTable};

#[derive(Parser)]
#[command(name = "route-resolver")]
#[command(about = "Resolve host/path keys against a route table", long_about = None)]
struct Cli {
    /// Route table file.
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route table and print its size
    Check,
    /// Resolve one or more host/path keys
    Resolve {
        /// Keys such as "shop.example.com/orders/42?page=2"
        #[arg(required = true)]
        keys: Vec<String>,

        /// Print a JSON object instead of one line per key
        #[arg(long)]
        json: bool,
    },
    /// Resolve keys read from stdin, reloading the table when the file changes
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    logging::init(&config.observability)?;

    tracing::info!(
        path = %cli.config.display(),
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let table = RouteTable::from_config(&config);

    match cli.command {
        Commands::Check => {
            println!(
                "{}: {} rules, {} entries",
                cli.config.display(),
                table.rules(),
                table.entries()
            );
        }
        Commands::Resolve { keys, json } => {
            if json {
                let results: Map<String, Value> = keys
                    .iter()
                    .map(|key| {
                        let service = table.resolve_key(key).map(Value::from);
                        (key.clone(), service.unwrap_or(Value::Null))
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for key in &keys {
                    print_match(key, table.resolve_key(key));
                }
            }
        }
        Commands::Watch => watch(cli.config, table).await?,
    }

    Ok(())
}

async fn watch(path: PathBuf, table: RouteTable) -> Result<(), Box<dyn std::error::Error>> {
    let shared = SharedRouteTable::new(table);
    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _watcher = watcher.run()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(key) => {
                        let key = key.trim();
                        if !key.is_empty() {
                            print_match(key, shared.load().resolve_key(key));
                        }
                    }
                    None => break,
                }
            }
            Some(config) = updates.recv() => {
                shared.reload(&config);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn print_match(key: &str, service: Option<&str>) {
    println!("{key} -> {}", service.unwrap_or("<none>"));
}
