//! HTTP server implementation using axum

use crate::catalog::{self, Book};
use crate::error::Error;
use crate::pdf;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Immutable server configuration, built once at startup and shared with
/// every request handler.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory containing the PDF books
    pub books_dir: PathBuf,
    /// Chunk size used when the client omits `words`
    pub words_per_line: usize,
    /// Bind address for the HTTP listener
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            books_dir: PathBuf::from("books"),
            words_per_line: pdf::DEFAULT_WORDS_PER_LINE,
            bind_addr: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Shared request state: a cheap clone over the process-wide configuration.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// API boundary error
// ============================================================================

/// Status code plus client-safe message, rendered as `{"error": ...}`.
pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(serde_json::json!({ "error": self.1 }))).into_response()
    }
}

fn bad_request(msg: impl Into<String>) -> ApiError {
    ApiError(StatusCode::BAD_REQUEST, msg.into())
}

fn not_found(msg: impl Into<String>) -> ApiError {
    ApiError(StatusCode::NOT_FOUND, msg.into())
}

impl From<Error> for ApiError {
    /// The error-kind-to-status table. Extractor errors carry no HTTP
    /// knowledge; the mapping happens only here.
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::PdfNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Extraction { .. } | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError(status, err.client_message())
    }
}

// ============================================================================
// Request / Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BookQuery {
    #[serde(default)]
    pub name: Option<String>,
    /// Kept as a raw string so a malformed value is rejected through
    /// [`ApiError`] rather than axum's plain-text query rejection.
    #[serde(default)]
    pub words: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub book: String,
    pub words_per_line: usize,
    pub lines: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

// GET /health
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// GET /books
async fn list_books_handler(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(catalog::list_books(&state.config.books_dir))
}

// GET /book?name=<file.pdf>&words=<n>
async fn get_book_handler(
    State(state): State<AppState>,
    Query(params): Query<BookQuery>,
) -> Result<Json<BookResponse>, ApiError> {
    let name = params.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(bad_request("Query parameter 'name' is required"));
    }

    let words_per_line = match params.words.as_deref() {
        None => state.config.words_per_line,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(bad_request(
                    "Query parameter 'words' must be a positive integer",
                ))
            }
        },
    };

    // Catalog membership is the only way to address a file; names carrying
    // path separators never reach the filesystem.
    let known = catalog::list_books(&state.config.books_dir)
        .into_iter()
        .any(|book| book.name == name);
    if !known {
        return Err(not_found("Book not found"));
    }

    let path = state.config.books_dir.join(name);
    let lines = pdf::extract_lines(&path, words_per_line).map_err(|e| {
        tracing::warn!(book = name, error = %e, "extraction failed");
        ApiError::from(e)
    })?;

    Ok(Json(BookResponse {
        book: name.to_string(),
        words_per_line,
        lines,
    }))
}

// ============================================================================
// Router / entry points
// ============================================================================

/// Build the router for the given state. Separated from serving so tests can
/// exercise it without a listener.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/books", get(list_books_handler))
        .route("/book", get(get_book_handler))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server with the default configuration.
pub async fn run_server() -> anyhow::Result<()> {
    run_server_with_config(ServerConfig::default()).await
}

/// Run the HTTP server with full configuration.
pub async fn run_server_with_config(config: ServerConfig) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr.clone();
    tracing::info!(books_dir = %config.books_dir.display(), "serving PDF book catalog");

    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
