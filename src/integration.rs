//! Pure core integration functions.
//!
//! Turns raw corpus text into validated comments. Kept free of I/O so the
//! built-in seed, corpus files and tests all share one path.

use crate::model::{Comment, ParseError};
use crate::parser;
use std::collections::HashSet;

/// Process JSONL lines into comments.
///
/// This is a pure function that:
/// - Skips blank lines
/// - Parses each remaining line into a `Comment`
/// - Rejects records whose id was already seen
/// - Collects successful parses and errors separately
///
/// # Arguments
///
/// * `lines` - Raw JSONL lines to process
/// * `starting_line_number` - Line number of the first line (for error reporting)
///
/// # Returns
///
/// Tuple of (successfully parsed comments in input order, parse errors)
pub fn process_lines<I, S>(lines: I, starting_line_number: usize) -> (Vec<Comment>, Vec<ParseError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    process_decoded(
        lines.into_iter().map(Ok::<S, ParseError>),
        starting_line_number,
    )
}

/// Process undecoded JSONL lines into comments.
///
/// Same pipeline as [`process_lines`], for lines read as raw bytes. A
/// trailing `\r` is dropped. A line that is not valid UTF-8 becomes
/// `ParseError::InvalidUtf8` and the rest of the input is still processed.
pub fn process_byte_lines<I, B>(
    lines: I,
    starting_line_number: usize,
) -> (Vec<Comment>, Vec<ParseError>)
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let decoded = lines.into_iter().enumerate().map(|(index, bytes)| {
        let bytes = bytes.as_ref();
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| ParseError::InvalidUtf8 {
                line: starting_line_number + index,
            })
    });
    process_decoded(decoded, starting_line_number)
}

fn process_decoded<I, S>(lines: I, starting_line_number: usize) -> (Vec<Comment>, Vec<ParseError>)
where
    I: IntoIterator<Item = Result<S, ParseError>>,
    S: AsRef<str>,
{
    let mut comments = Vec::new();
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                errors.push(err);
                continue;
            }
        };
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let line_number = starting_line_number + index;
        match parser::parse_comment(line, line_number) {
            Ok(comment) => {
                if seen_ids.insert(comment.id().clone()) {
                    comments.push(comment);
                } else {
                    errors.push(ParseError::DuplicateId {
                        line: line_number,
                        id: comment.id().to_string(),
                    });
                }
            }
            Err(err) => errors.push(err),
        }
    }

    (comments, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> String {
        format!(
            r#"{{"id":"{}","author":"Anon","content":"Text {}","sentiment":"neutral","confidence":0.5,"timestamp":"2026-02-18 10:00"}}"#,
            id, id
        )
    }

    #[test]
    fn process_lines_keeps_input_order() {
        let lines = vec![record("3"), record("1"), record("2")];

        let (comments, errors) = process_lines(lines, 1);

        assert!(errors.is_empty(), "Should have no parse errors");
        let ids: Vec<&str> = comments.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn process_lines_skips_blank_lines() {
        let lines = vec![record("1"), String::new(), "   ".to_string(), record("2")];

        let (comments, errors) = process_lines(lines, 1);

        assert_eq!(comments.len(), 2);
        assert!(errors.is_empty());
    }

    #[test]
    fn process_lines_collects_errors_and_continues() {
        let lines = vec![record("1"), "garbage".to_string(), record("2")];

        let (comments, errors) = process_lines(lines, 1);

        assert_eq!(comments.len(), 2, "Valid records around a bad one survive");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line(), 2);
    }

    #[test]
    fn process_lines_rejects_duplicate_ids() {
        let lines = vec![record("1"), record("1")];

        let (comments, errors) = process_lines(lines, 10);

        assert_eq!(comments.len(), 1, "First occurrence wins");
        assert_eq!(
            errors,
            vec![ParseError::DuplicateId {
                line: 11,
                id: "1".to_string(),
            }]
        );
    }

    #[test]
    fn process_lines_numbers_from_starting_line() {
        let lines = vec!["{".to_string()];

        let (_, errors) = process_lines(lines, 42);

        assert_eq!(errors[0].line(), 42);
    }

    #[test]
    fn process_byte_lines_skips_invalid_utf8() {
        let lines: Vec<Vec<u8>> = vec![
            record("1").into_bytes(),
            b"\xff\xfe garbage".to_vec(),
            record("2").into_bytes(),
        ];

        let (comments, errors) = process_byte_lines(lines, 1);

        let ids: Vec<&str> = comments.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(errors, vec![ParseError::InvalidUtf8 { line: 2 }]);
    }

    #[test]
    fn process_byte_lines_strips_carriage_returns() {
        let lines = vec![format!("{}\r", record("1")).into_bytes(), b"\r".to_vec()];

        let (comments, errors) = process_byte_lines(lines, 1);

        assert_eq!(comments.len(), 1);
        assert!(errors.is_empty(), "CRLF line endings are not errors: {errors:?}");
    }
}
