//! Documentation comment extraction.
//!
//! Two comment styles are recognized, never mixed:
//!
//! - runs of `#` line comments ending at the requested row
//! - a single `/* ... */` block comment whose closing marker is the last
//!   non-blank thing before the requested row ends
//!
//! Block comments are found with a backward scanner (`BlockScan`) that moves
//! right to left, bottom to top, one character at a time.

use regex::Regex;
use std::sync::OnceLock;

use super::format::filter_documentation;

fn hash_comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*#\s*(.*)").expect("valid regex"))
}

/// Return the formatted documentation comment ending at `row`, if any.
pub fn extract_documentation_at_row<S: AsRef<str>>(lines: &[S], row: usize) -> Option<String> {
    let line = lines.get(row)?.as_ref();

    if let Some(first) = hash_comment_text(line) {
        let mut collected = vec![first];
        for earlier in lines[..row].iter().rev() {
            match hash_comment_text(earlier.as_ref()) {
                Some(text) => collected.push(text),
                None => break,
            }
        }
        return Some(filter_documentation(&collected.join("\n")));
    }

    block_comment_text(lines, row).map(|text| filter_documentation(&text))
}

/// Text of a `#` comment line with the marker and leading whitespace removed.
fn hash_comment_text(line: &str) -> Option<&str> {
    hash_comment_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A character position inside the line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// State of the backward block comment scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockScan {
    /// Looking for `*/`; only whitespace and `/` may be skipped
    SeekingClose,
    /// Closing marker found, looking for the matching `/*`
    SeekingOpen { close: Position },
    /// Both markers located
    Done { open: Position, close: Position },
    /// Foreign code sits between the comment and the row
    Aborted,
}

impl BlockScan {
    /// Consume the character pair starting at `col` of `line`.
    ///
    /// `line` is the row's characters; `col + 1` must be in bounds.
    pub fn step(self, line: &[char], row: usize, col: usize) -> BlockScan {
        let pair = (line[col], line[col + 1]);
        match self {
            BlockScan::SeekingClose => {
                if pair == ('*', '/') {
                    BlockScan::SeekingOpen {
                        close: Position { row, col },
                    }
                } else if line[col].is_whitespace() || line[col] == '/' {
                    BlockScan::SeekingClose
                } else {
                    BlockScan::Aborted
                }
            }
            BlockScan::SeekingOpen { close } => {
                // On the closing row the opener must end before `*/` starts
                let clear_of_close = row != close.row || col + 2 <= close.col;
                if pair == ('/', '*') && clear_of_close {
                    BlockScan::Done {
                        open: Position { row, col },
                        close,
                    }
                } else {
                    self
                }
            }
            BlockScan::Done { .. } | BlockScan::Aborted => self,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, BlockScan::Done { .. } | BlockScan::Aborted)
    }
}

/// Locate the block comment ending at or above `row`.
pub fn scan_block_comment<S: AsRef<str>>(lines: &[S], row: usize) -> BlockScan {
    let mut state = BlockScan::SeekingClose;
    if lines.is_empty() {
        return state;
    }

    for r in (0..=row.min(lines.len() - 1)).rev() {
        let chars: Vec<char> = lines[r].as_ref().chars().collect();
        if chars.len() < 2 {
            continue;
        }
        for col in (0..chars.len() - 1).rev() {
            state = state.step(&chars, r, col);
            if state.is_finished() {
                return state;
            }
        }
    }

    state
}

/// Raw interior text of the block comment ending at `row`.
fn block_comment_text<S: AsRef<str>>(lines: &[S], row: usize) -> Option<String> {
    let BlockScan::Done { open, close } = scan_block_comment(lines, row) else {
        return None;
    };

    let line_chars = |r: usize| -> Vec<char> { lines[r].as_ref().chars().collect() };
    let slice = |chars: &[char], from: usize, to: usize| -> String {
        let to = to.min(chars.len());
        if from >= to {
            String::new()
        } else {
            chars[from..to].iter().collect()
        }
    };

    // Skip `/*` and the character after it (a space, or the second `*` of `/**`)
    let body_start = open.col + 3;

    let mut rows = vec![String::new()];
    if open.row == close.row {
        rows.push(slice(&line_chars(open.row), body_start, close.col));
    } else {
        let first = line_chars(open.row);
        let head = slice(&first, body_start, first.len());
        // A bare `/**` line contributes nothing
        if !head.trim().is_empty() {
            rows.push(head);
        }
        for r in open.row + 1..close.row {
            rows.push(lines[r].as_ref().to_string());
        }
        rows.push(slice(&line_chars(close.row), 0, close.col));
    }

    Some(rows.join("\n"))
}
