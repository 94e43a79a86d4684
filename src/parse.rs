// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Grammars for the puzzle inputs
//!
//! Both inputs are newline-delimited records. Blank lines, including lines with nothing but
//! whitespace, are skipped, and a trailing `\r` on each line is ignored. Each remaining line is
//! parsed on its own, and the first one that fails ends the parse with a [ParseError] pointing at
//! the offending text within the whole input.

use chumsky::prelude::*;
use itertools::Itertools;

use crate::navigation::{Direction, Instruction};
use crate::{ParseError, ParseErrorKind};

macro_rules! padded {
    ($inner: expr) => {{ $inner.padded_by(text::inline_whitespace()) }};
}

type RichErr<'a> = chumsky::extra::Err<Rich<'a, char>>;

/// A slice of the line along with its span within that line
type Spanned<'a> = (&'a str, SimpleSpan);

fn integer<'a>() -> impl Parser<'a, &'a str, Spanned<'a>, RichErr<'a>> + Clone {
    just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .map_with(|s, e| (s, e.span()))
        .labelled("integer")
}

fn reading<'a>() -> impl Parser<'a, &'a str, Spanned<'a>, RichErr<'a>> {
    padded!(integer()).then_ignore(end())
}

fn instruction<'a>() -> impl Parser<'a, &'a str, (Spanned<'a>, Spanned<'a>), RichErr<'a>> {
    let direction = text::ascii::ident()
        .map_with(|s, e| (s, e.span()))
        .labelled("direction");
    let magnitude = text::digits(10)
        .to_slice()
        .map_with(|s, e| (s, e.span()))
        .labelled("magnitude");

    padded!(
        direction
            .then_ignore(text::inline_whitespace().at_least(1))
            .then(magnitude)
    )
    .then_ignore(end())
}

/// One non-blank line of input
struct Record<'a> {
    /// 1-based line number
    line: usize,
    /// Byte offset of the start of the line within the whole input
    offset: usize,
    text: &'a str,
}

impl<'a> Record<'a> {
    fn error(&self, kind: ParseErrorKind, span: SimpleSpan) -> ParseError {
        let span = span.into_range();
        ParseError {
            kind,
            line: self.line,
            span: (self.offset + span.start)..(self.offset + span.end),
        }
    }

    fn parse_with<O>(
        &self,
        parser: &impl Parser<'a, &'a str, O, RichErr<'a>>,
    ) -> Result<O, ParseError> {
        parser
            .parse(self.text)
            .into_result()
            .map_err(|errs| match errs.into_iter().next() {
                Some(err) => self.error(ParseErrorKind::Syntax(describe(&err)), *err.span()),
                None => self.error(
                    ParseErrorKind::Syntax(String::from("malformed record")),
                    SimpleSpan::from(0..self.text.len()),
                ),
            })
    }

    fn integer(&self, (digits, span): Spanned<'a>) -> Result<i64, ParseError> {
        digits
            .parse()
            .map_err(|_| self.error(ParseErrorKind::MalformedInteger(digits.to_owned()), span))
    }
}

fn describe(err: &Rich<'_, char>) -> String {
    let found = match err.found() {
        Some(c) => format!("found {c:?}"),
        None => String::from("found end of line"),
    };
    let mut expected = err.expected().peekable();
    if expected.peek().is_none() {
        found
    } else {
        format!("{found}, expected {}", expected.format(" or "))
    }
}

fn records(input: &str) -> impl Iterator<Item = Record<'_>> {
    let mut offset = 0;
    input.split('\n').enumerate().filter_map(move |(i, raw)| {
        let start = offset;
        offset += raw.len() + 1;
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        (!text.trim().is_empty()).then_some(Record {
            line: i + 1,
            offset: start,
            text,
        })
    })
}

/// Parse one integer per line, as used for sonar depth readings
///
/// ```
/// use aoc::parse::parse_readings;
/// assert_eq!(parse_readings("199\n\n200\r\n -3 \n"), Ok(vec![199, 200, -3]));
/// ```
pub fn parse_readings(input: &str) -> Result<Vec<i64>, ParseError> {
    let parser = reading();
    records(input)
        .map(|record| {
            let digits = record.parse_with(&parser)?;
            record.integer(digits)
        })
        .collect()
}

/// Parse one `direction magnitude` pair per line, as used for the planned course
///
/// ```
/// use aoc::parse::parse_instructions;
/// use aoc::navigation::{Direction, Instruction};
/// assert_eq!(
///     parse_instructions("forward 5\ndown 2\n"),
///     Ok(vec![
///         Instruction::new(Direction::Forward, 5),
///         Instruction::new(Direction::Down, 2),
///     ])
/// );
/// ```
pub fn parse_instructions(input: &str) -> Result<Vec<Instruction>, ParseError> {
    let parser = instruction();
    records(input)
        .map(|record| {
            let ((word, word_span), magnitude) = record.parse_with(&parser)?;
            let direction: Direction = word.parse().map_err(|word| {
                record.error(ParseErrorKind::InvalidInstruction(word), word_span)
            })?;
            Ok(Instruction::new(direction, record.integer(magnitude)?))
        })
        .collect()
}
