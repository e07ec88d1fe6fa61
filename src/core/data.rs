//! Token-stream loader for `<name> <number>*` data sets.
//!
//! There is no record separator: a data set ends at the first token that
//! does not parse as a float, and that token names the next data set.
//! [`TokenReader`] gives the one token of lookahead this needs.

use std::{
    collections::VecDeque,
    io::{BufRead, BufReader, Read},
};

use crate::core::{constants::BUF_CAP, error::ReadError, stats::Summary};

// --- Public Row Structs ---
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub name: String,
    /// Sorted ascending once summarised
    pub values: Vec<f64>,
    pub summary: Summary,
}

impl Dataset {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// Fill in `summary`; a data set without values keeps the zero summary.
    pub fn summarize(&mut self) {
        if let Some(s) = Summary::from_values(&mut self.values) {
            self.summary = s;
        }
    }
}

// --- Helpers ---

/// Parse one token as an `f64`.
///
/// Literals that overflow to infinity (`1e400`) are not numbers; spelled-out
/// `inf` / `infinity` are, with or without a sign. `nan` takes no sign.
#[inline]
#[must_use]
pub fn parse_value(token: &str) -> Option<f64> {
    let v = lexical_core::parse::<f64>(token.as_bytes()).ok()?;
    if v.is_infinite() && !token.to_ascii_lowercase().contains("inf") {
        return None;
    }
    if v.is_nan() && token.starts_with(['+', '-']) {
        return None;
    }
    Some(v)
}

// --- Tokenizer ---

/// Whitespace-delimited tokens with one token of lookahead.
pub struct TokenReader<R> {
    src: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    line_no: usize,
    eof: bool,
}

impl<R: BufRead> TokenReader<R> {
    #[must_use]
    pub fn new(src: R) -> Self {
        Self {
            src,
            buf: Vec::with_capacity(256),
            pending: VecDeque::new(),
            line_no: 0,
            eof: false,
        }
    }

    /// Top up `pending` until it holds a token or the input is exhausted.
    fn fill(&mut self) -> Result<(), ReadError> {
        while self.pending.is_empty() && !self.eof {
            self.buf.clear();
            let n = self
                .src
                .read_until(b'\n', &mut self.buf)
                .map_err(|source| ReadError {
                    line: self.line_no + 1,
                    source,
                })?;
            if n == 0 {
                self.eof = true;
                break;
            }
            self.line_no += 1;
            let line = String::from_utf8_lossy(&self.buf);
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(())
    }

    /// The next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<&str>, ReadError> {
        self.fill()?;
        Ok(self.pending.front().map(String::as_str))
    }

    pub fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        self.fill()?;
        Ok(self.pending.pop_front())
    }

    /// Consume the next token only if it is a number.
    pub fn next_value(&mut self) -> Result<Option<f64>, ReadError> {
        let Some(v) = self.peek()?.and_then(parse_value) else {
            return Ok(None);
        };
        self.pending.pop_front();
        Ok(Some(v))
    }
}

// --- Data set ingest ---

/// Read every data set from `src` and summarise each one.
///
/// The first token, and every token that follows a run of numbers, is a
/// name, even if it looks numeric. Empty input gives an empty vector.
pub fn read_boxes<R: BufRead>(src: R) -> Result<Vec<Dataset>, ReadError> {
    let mut tokens = TokenReader::new(src);
    let mut boxes = Vec::new();

    while let Some(name) = tokens.next_token()? {
        let mut b = Dataset::new(name);
        while let Some(v) = tokens.next_value()? {
            b.values.push(v);
        }
        b.summarize();
        boxes.push(b);
    }
    Ok(boxes)
}

pub fn read_boxes_from<R: Read>(src: R) -> Result<Vec<Dataset>, ReadError> {
    read_boxes(BufReader::with_capacity(BUF_CAP, src))
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;

    fn read(s: &str) -> Vec<Dataset> {
        read_boxes(Cursor::new(s)).unwrap()
    }

    #[test]
    fn two_sets_on_one_line() {
        let boxes = read("linear 1 2 3 4 5 6 exponential 2 4 8 16 32 64");
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].name, "linear");
        assert_eq!(boxes[0].values, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(boxes[1].name, "exponential");
        assert_eq!(boxes[1].values, [2.0, 4.0, 8.0, 16.0, 32.0, 64.0]);
    }

    #[test]
    fn summaries_are_filled() {
        let boxes = read("linear 6 5 4 3 2 1");
        assert_eq!(boxes[0].summary.values(), [1.0, 2.0, 3.5, 5.0, 6.0]);
    }

    #[test]
    fn empty_input() {
        assert!(read("").is_empty());
        assert!(read(" \n\t\n ").is_empty());
    }

    #[test]
    fn tokens_span_mixed_whitespace() {
        let boxes = read("a\t1\n2\r\n\x0b3\x0c b\u{a0}4\u{3000}5\n");
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].values, [1.0, 2.0, 3.0]);
        assert_eq!(boxes[1].values, [4.0, 5.0]);
    }

    #[test]
    fn trailing_name_without_values() {
        let boxes = read("a 1 2 b");
        assert_eq!(boxes.len(), 2);
        assert!(boxes[1].values.is_empty());
        assert_eq!(boxes[1].summary, Summary::default());
    }

    #[test]
    fn consecutive_names() {
        let boxes = read("a b 3");
        assert_eq!(boxes[0].name, "a");
        assert!(boxes[0].values.is_empty());
        assert_eq!(boxes[1].name, "b");
        assert_eq!(boxes[1].values, [3.0]);
    }

    #[test]
    fn numeric_token_in_name_position_is_a_name() {
        let boxes = read("42 1 2");
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].name, "42");
        assert_eq!(boxes[0].values, [1.0, 2.0]);
    }

    #[test]
    fn duplicate_names_stay_separate() {
        let boxes = read("x 1 y 2 x 3");
        let names: Vec<_> = boxes.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["x", "y", "x"]);
    }

    #[test]
    fn number_syntax() {
        assert_eq!(parse_value("1.5e3"), Some(1500.0));
        assert_eq!(parse_value("-2"), Some(-2.0));
        assert_eq!(parse_value("-2.5e-1"), Some(-0.25));
        assert_eq!(parse_value("inf"), Some(f64::INFINITY));
        assert!(parse_value("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_value("-inf"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_value("+nan"), None);
        assert_eq!(parse_value("-NaN"), None);
        assert_eq!(parse_value("1e400"), None);
        assert_eq!(parse_value("12abc"), None);
        assert_eq!(parse_value("exponential"), None);
    }

    #[test]
    fn overflowing_literal_starts_next_set() {
        let boxes = read("a 1 1e400 2");
        assert_eq!(boxes[0].values, [1.0]);
        assert_eq!(boxes[1].name, "1e400");
        assert_eq!(boxes[1].values, [2.0]);
    }

    #[test]
    fn signed_nan_starts_next_set() {
        let boxes = read("a 1 +nan 2 3");
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].values, [1.0]);
        assert_eq!(boxes[1].name, "+nan");
        assert_eq!(boxes[1].values, [2.0, 3.0]);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut t = TokenReader::new(Cursor::new("a 1\nb"));
        assert_eq!(t.peek().unwrap(), Some("a"));
        assert_eq!(t.next_value().unwrap(), None);
        assert_eq!(t.next_token().unwrap().as_deref(), Some("a"));
        assert_eq!(t.next_value().unwrap(), Some(1.0));
        assert_eq!(t.next_token().unwrap().as_deref(), Some("b"));
        assert_eq!(t.next_token().unwrap(), None);
    }

    struct Failing;
    impl Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn io_failure_is_reported() {
        let err = read_boxes_from(Failing).unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn io_failure_after_some_data_still_fails() {
        let src = Cursor::new("a 1 2\n").chain(Failing);
        let err = read_boxes_from(src).unwrap_err();
        assert_eq!(err.line, 2);
    }
}
