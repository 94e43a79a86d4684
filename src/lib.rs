// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Solutions to the first two puzzles of [Advent of Code 2021], plus the parsing and bookkeeping
//! needed to run them.
//!
//! [Day 1] counts how often sonar depth readings increase, both reading-by-reading and over a
//! sliding window of three. [Day 2] steers a submarine through a list of movement instructions,
//! under either the naive interpretation or the one that tracks an aim.
//!
//! # Example
//!
//! ```rust
//! use aoc::prelude::*;
//!
//! let course = parse_instructions("forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n")
//!     .unwrap();
//!
//! let mut navigator = Navigator::new(Policy::Aimed);
//! navigator.run(course).unwrap();
//! assert_eq!(navigator.product(), Ok(900));
//! ```
//!
//! Each day is also reachable through the [registry], which maps a day number to its pair of part
//! functions:
//!
//! ```rust
//! use aoc::prelude::*;
//!
//! let sonar = lookup(1).unwrap();
//! let answer = sonar.solve(Part::One, "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n");
//! assert_eq!(answer.unwrap().value, 7);
//! ```
//!
//! [Advent of Code 2021]: https://adventofcode.com/2021
//! [Day 1]: https://adventofcode.com/2021/day/1
//! [Day 2]: https://adventofcode.com/2021/day/2

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io;
use std::ops::Range;
use std::path::PathBuf;

use thiserror::Error;

pub mod navigation;
pub mod parse;
pub mod registry;
pub mod sonar;

/// A small module that re-exports the items needed to parse input and run the solvers
pub mod prelude {
    pub use crate::navigation::{Direction, Instruction, Navigator, Policy, Position, navigate};
    pub use crate::parse::{parse_instructions, parse_readings};
    pub use crate::registry::{Answer, Part, Puzzle, lookup};
    pub use crate::{ParseError, ParseErrorKind, PuzzleError};
}

/// An error that ends a puzzle run
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The input file could not be opened or read
    #[error("failed to read input file {}: {source}", path.display())]
    FileNotFound {
        /// Path that was tried
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
    /// A record in the input could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// There were too few records for the computation to be well defined
    #[error("need at least {needed} records, found {found}")]
    EmptyInput {
        /// Minimum number of records
        needed: usize,
        /// Number of records actually present
        found: usize,
    },
    /// Intermediate arithmetic left the range of [i64]
    #[error("arithmetic overflow while computing the answer")]
    Overflow,
    /// No solver is registered for the requested day
    #[error("no puzzle registered for day {0}")]
    UnknownPuzzle(u8),
}

// io::Error isn't PartialEq, so compare FileNotFound by path and error kind
impl PartialEq for PuzzleError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::FileNotFound { path: lp, source: ls },
                Self::FileNotFound { path: rp, source: rs },
            ) => lp == rp && ls.kind() == rs.kind(),
            (Self::Parse(lhs), Self::Parse(rhs)) => lhs == rhs,
            (
                Self::EmptyInput { needed: ln, found: lf },
                Self::EmptyInput { needed: rn, found: rf },
            ) => ln == rn && lf == rf,
            (Self::Overflow, Self::Overflow) => true,
            (Self::UnknownPuzzle(lhs), Self::UnknownPuzzle(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

/// What went wrong with a record that failed to parse
#[derive(Debug, PartialEq, Clone)]
pub enum ParseErrorKind {
    /// The record did not have the expected shape. Holds the parser's explanation.
    Syntax(String),
    /// The record had digits where an integer belongs, but they did not fit in an [i64]
    MalformedInteger(String),
    /// The direction word was not one of `forward`, `down`, or `up`
    InvalidInstruction(String),
}

/// A record that could not be parsed, along with where it was found
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// 1-based line number of the record
    pub line: usize,
    /// Byte range within the whole input of the offending text
    pub span: Range<usize>,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::Syntax(reason) => write!(f, "{reason}"),
            ParseErrorKind::MalformedInteger(digits) => {
                write!(f, "{digits:?} is not a valid 64-bit integer")
            }
            ParseErrorKind::InvalidInstruction(word) => {
                write!(f, "unrecognized direction {word:?}")
            }
        }
    }
}

impl StdError for ParseError {}
