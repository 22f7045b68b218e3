//! `.sfx` table file parser.
//!
//! A table file is a list of `"suffix" = "value";` entries. Line comments
//! start with `//`. Strings accept the escapes `\"` and `\\`.

use winnow::combinator::{alt, delimited, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use crate::error::TableError;

/// One `"suffix" = "value";` line, before the value is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub suffix: String,
    pub value: String,
}

/// Parse `.sfx` source into raw entries, in file order.
pub fn parse_table(input: &str) -> Result<Vec<RawEntry>, TableError> {
    let mut remaining = input;
    match file(&mut remaining) {
        Ok(entries) => {
            let _ = skip_ws_and_comments(&mut remaining);
            if remaining.is_empty() {
                Ok(entries)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(TableError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(TableError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

fn file(input: &mut &str) -> ModalResult<Vec<RawEntry>> {
    skip_ws_and_comments(input)?;
    repeat(0.., terminated(entry, skip_ws_and_comments)).parse_next(input)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse an entry: "suffix" = "value";
fn entry(input: &mut &str) -> ModalResult<RawEntry> {
    let suffix = quoted_string(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let value = quoted_string(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok(RawEntry { suffix, value })
}

/// Parse a double-quoted string on a single line.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    delimited('"', repeat(0.., string_char), '"').parse_next(input)
}

fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((
        preceded('\\', one_of(['"', '\\'])),
        none_of(['"', '\\', '\n']),
    ))
    .parse_next(input)
}
