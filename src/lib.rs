//! PDF Bookshelf Server Library
//!
//! This crate serves a directory of PDF books over a small HTTP JSON API:
//! - `GET /health`: liveness check
//! - `GET /books`: catalog of available PDFs with derived display titles
//! - `GET /book?name=...&words=N`: one book's text, chunked into N-word lines

pub mod catalog;
pub mod error;
pub mod pdf;
pub mod server;

pub use error::{Error, Result};
pub use server::{
    app, run_server, run_server_with_config, ApiError, AppState, BookQuery, BookResponse,
    ServerConfig,
};
