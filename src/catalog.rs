//! Book catalog derived from the PDF directory
//!
//! The catalog is recomputed from directory contents on every call; there is
//! no stored state to go stale.

use serde::Serialize;
use std::path::Path;

/// A PDF book available in the configured directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Filename, unique key within the directory
    pub name: String,
    /// Display title derived from the filename
    pub title: String,
}

/// Display title for a filename: the `.pdf` extension is stripped and
/// underscores become spaces.
pub fn title_for(name: &str) -> String {
    let stem = name.strip_suffix(".pdf").unwrap_or(name);
    stem.replace('_', " ")
}

/// List every `*.pdf` file in `dir` as a [`Book`], sorted by filename
/// ascending. A missing or unreadable directory yields an empty catalog
/// rather than an error.
pub fn list_books(dir: &Path) -> Vec<Book> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut books: Vec<Book> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| Path::new(name).extension().is_some_and(|ext| ext == "pdf"))
        .map(|name| Book {
            title: title_for(&name),
            name,
        })
        .collect();

    books.sort_by(|a, b| a.name.cmp(&b.name));
    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_strips_extension_and_underscores() {
        assert_eq!(title_for("war_and_peace.pdf"), "war and peace");
        assert_eq!(title_for("plain.pdf"), "plain");
        assert_eq!(title_for("no_extension"), "no extension");
    }

    #[test]
    fn test_missing_directory_yields_empty_catalog() {
        let books = list_books(Path::new("/nonexistent/books/dir"));
        assert!(books.is_empty());
    }

    #[test]
    fn test_only_pdf_files_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"text").unwrap();
        std::fs::write(dir.path().join("cover.png"), b"png").unwrap();
        std::fs::write(dir.path().join("a_book.pdf"), b"%PDF-1.5").unwrap();

        let books = list_books(dir.path());
        assert_eq!(
            books,
            vec![Book {
                name: "a_book.pdf".to_string(),
                title: "a book".to_string(),
            }]
        );
    }

    #[test]
    fn test_catalog_sorted_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zebra.pdf", "alpha.pdf", "middle.pdf"] {
            std::fs::write(dir.path().join(name), b"%PDF-1.5").unwrap();
        }

        let names: Vec<String> = list_books(dir.path()).into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["alpha.pdf", "middle.pdf", "zebra.pdf"]);
    }

    #[test]
    fn test_directory_with_no_pdfs_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.md"), b"hello").unwrap();

        assert!(list_books(dir.path()).is_empty());
    }
}
