//! PDF processing layer
//!
//! This module provides PDF text extraction using lopdf.

mod chunker;
mod reader;

pub use chunker::{chunk_words, extract_lines, DEFAULT_WORDS_PER_LINE};
pub use reader::PdfReader;
