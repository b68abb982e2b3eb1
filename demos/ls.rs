//! Example: List nodes in a bucket
//!
//! Usage:
//!   cargo run --example ls -- --bucket BUCKET_ID [--url URL] [--limit N] [--offset N] [--dirs]
//!
//! Without `--limit` every node is listed. Set `RUST_LOG=bucketlib=debug`
//! to see each page request.

use std::env;

use bucketlib::{ClientConfig, FileStorage, NodeQuery};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config = ClientConfig::from_env()?;
    let mut bucket = None;
    let mut query = NodeQuery::new();
    let mut bounded = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--url" => {
                if let Some(url) = args.get(i + 1) {
                    config = config.with_base_url(url.clone());
                }
                i += 2;
            }
            "--bucket" | "-b" => {
                bucket = args.get(i + 1).cloned();
                i += 2;
            }
            "--limit" => {
                query = query.limit(args.get(i + 1).ok_or("--limit needs a value")?.parse()?);
                bounded = true;
                i += 2;
            }
            "--offset" => {
                query = query.offset(args.get(i + 1).ok_or("--offset needs a value")?.parse()?);
                i += 2;
            }
            "--dirs" => {
                query = query.is_directory(true);
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bucket = bucket.ok_or("--bucket is required")?;
    let storage = FileStorage::new(config)?;

    // Ctrl-C stops paging; whatever was fetched is still printed.
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let result = if bounded {
        storage.list_up_to(&bucket, &query, &cancel).await
    } else {
        storage.list_all(&bucket, &query, &cancel).await
    };

    let (listing, error) = match result {
        Ok(listing) => (listing, None),
        Err(e) => {
            let (listing, source) = e.into_parts();
            (listing, Some(source))
        }
    };

    println!("\n📁 {} ({} of {} nodes)\n", bucket, listing.len(), listing.total);
    for node in &listing.nodes {
        let type_icon = if node.is_folder() { "📁" } else { "📄" };
        println!("  {} {} {} {}", type_icon, node.id, node.name, format_size(node.size()));
    }

    if let Some(e) = error {
        eprintln!("❌ Listing stopped early: {}", e);
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.1}MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2}GB", bytes as f64 / 1_073_741_824.0)
    }
}
