//! Word chunking for the line-oriented reading view
//!
//! Page texts are flattened into one word stream (newlines and page breaks
//! collapse to single spaces) and regrouped into fixed-size "lines".

use crate::error::Result;
use crate::pdf::PdfReader;
use std::path::Path;

/// Chunk size used when the client does not supply one.
pub const DEFAULT_WORDS_PER_LINE: usize = 3;

/// Group `words` into chunks of `words_per_line` words joined by single
/// spaces. The final chunk holds the remainder. `words_per_line` must be
/// positive; callers validate it before reaching this point.
pub fn chunk_words(words: &[&str], words_per_line: usize) -> Vec<String> {
    if words_per_line == 0 {
        return Vec::new();
    }

    words
        .chunks(words_per_line)
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Extract a PDF's text as fixed-size word groups.
///
/// Pages are read in ascending order; pages without extractable text are
/// skipped. The concatenated text is split on whitespace runs and chunked.
/// A PDF with no extractable text yields an empty vector, not an error.
pub fn extract_lines(path: impl AsRef<Path>, words_per_line: usize) -> Result<Vec<String>> {
    let reader = PdfReader::open(path)?;
    let pages = reader.extract_all_text();

    let words: Vec<&str> = pages
        .iter()
        .flat_map(|text| text.split_whitespace())
        .collect();

    Ok(chunk_words(&words, words_per_line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_chunk_words_basic() {
        let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
        assert_eq!(
            chunk_words(&words, 2),
            vec!["alpha beta", "gamma delta", "epsilon"]
        );
    }

    #[test]
    fn test_chunk_words_empty_input() {
        assert_eq!(chunk_words(&[], 3), Vec::<String>::new());
    }

    #[rstest]
    #[case(7, 3)]
    #[case(6, 3)]
    #[case(1, 3)]
    #[case(10, 1)]
    #[case(5, 5)]
    #[case(4, 9)]
    fn test_chunk_count_and_sizes(#[case] word_count: usize, #[case] words_per_line: usize) {
        let words: Vec<String> = (0..word_count).map(|i| format!("w{}", i)).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();

        let chunks = chunk_words(&refs, words_per_line);
        assert_eq!(chunks.len(), word_count.div_ceil(words_per_line));

        for (i, chunk) in chunks.iter().enumerate() {
            let size = chunk.split_whitespace().count();
            if i + 1 < chunks.len() {
                assert_eq!(size, words_per_line);
            } else {
                let expected_last = word_count - words_per_line * (chunks.len() - 1);
                assert_eq!(size, expected_last);
            }
        }
    }

    #[test]
    fn test_chunks_round_trip_to_word_sequence() {
        let words = ["one", "two", "three", "four", "five", "six", "seven"];
        let chunks = chunk_words(&words, 3);

        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect();
        assert_eq!(rejoined, words);
    }
}
