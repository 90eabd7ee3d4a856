//! PDF Bookshelf Server - Entry point
//!
//! Serves a directory of PDF books over HTTP.
//!
//! Usage:
//!   BOOKSHELF_DIR=/path/to/books pdf-bookshelf-server
//!   pdf-bookshelf-server --books-dir /path/to/books --bind 0.0.0.0:5000

use pdf_bookshelf_server::{run_server_with_config, ServerConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_bookshelf_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ServerConfig::default();
    if let Ok(dir) = std::env::var("BOOKSHELF_DIR") {
        if !dir.is_empty() {
            config.books_dir = PathBuf::from(dir);
        }
    }
    if let Ok(addr) = std::env::var("BOOKSHELF_BIND") {
        if !addr.is_empty() {
            config.bind_addr = addr;
        }
    }

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--books-dir" if i + 1 < args.len() => {
                config.books_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--bind" if i + 1 < args.len() => {
                config.bind_addr = args[i + 1].clone();
                i += 2;
            }
            "--words" if i + 1 < args.len() => {
                match args[i + 1].parse::<usize>() {
                    Ok(n) if n > 0 => config.words_per_line = n,
                    _ => anyhow::bail!("--words must be a positive integer"),
                }
                i += 2;
            }
            "--help" | "-h" => {
                println!("pdf-bookshelf-server — HTTP API for a directory of PDF books");
                println!();
                println!("Usage: pdf-bookshelf-server [--books-dir PATH] [--bind ADDR:PORT] [--words N]");
                println!();
                println!("Environment variables:");
                println!("  BOOKSHELF_DIR   Books directory (default: ./books)");
                println!("  BOOKSHELF_BIND  Bind address (default: 0.0.0.0:5000)");
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Starting PDF Bookshelf Server");

    run_server_with_config(config).await
}
