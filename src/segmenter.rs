//! Splits a free-text description into lower-cased clauses.

use std::iter::Peekable;
use std::str::Chars;

/// Characters that end a clause.
const TERMINATORS: [char; 4] = ['.', '!', ';', '\n'];

/// Lazy iterator over the clauses of a description.
///
/// Splitting is purely punctuation based: "Mr. Smith" or "9.99" are split
/// like any other sentence end.
pub struct Segmenter<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Segmenter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn read_fragment(&mut self) -> String {
        let mut s = String::new();
        while let Some(c) = self.chars.next() {
            if TERMINATORS.contains(&c) {
                break;
            }
            s.push(c);
        }
        s
    }
}

impl Iterator for Segmenter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.chars.peek().is_some() {
            let fragment = self.read_fragment();
            let trimmed = fragment.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_lowercase());
            }
        }
        None
    }
}

/// Convenience wrapper returning all clauses at once.
pub fn clauses(input: &str) -> Vec<String> {
    Segmenter::new(input).collect()
}
