// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! A plain table from day number to the functions that solve that day's puzzle

use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::{PuzzleError, navigation, sonar};

/// A solver for one part of a puzzle, taking the raw puzzle input
pub type Solution = fn(&str) -> Result<i64, PuzzleError>;

/// Which half of a day's puzzle to solve
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Part {
    /// The first half
    One = 1,
    /// The second half, unlocked after solving the first
    Two = 2,
}

impl Part {
    /// Both parts, in order
    pub const ALL: [Part; 2] = [Part::One, Part::Two];
}

impl TryFrom<u8> for Part {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(value),
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// One day's puzzle and its two solvers
#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    /// Day of the event, starting at 1
    pub day: u8,
    /// Title of the puzzle
    pub title: &'static str,
    /// Solver for [Part::One]
    pub part_one: Solution,
    /// Solver for [Part::Two]
    pub part_two: Solution,
}

/// Every puzzle with a solver, ordered by day
pub const PUZZLES: &[Puzzle] = &[
    Puzzle {
        day: 1,
        title: "Sonar Sweep",
        part_one: sonar::part_one,
        part_two: sonar::part_two,
    },
    Puzzle {
        day: 2,
        title: "Dive!",
        part_one: navigation::part_one,
        part_two: navigation::part_two,
    },
];

/// Find the puzzle for `day`
pub fn lookup(day: u8) -> Result<&'static Puzzle, PuzzleError> {
    PUZZLES
        .iter()
        .find(|p| p.day == day)
        .ok_or(PuzzleError::UnknownPuzzle(day))
}

/// Read a puzzle input from `path`
pub fn read_input_file(path: &Path) -> Result<String, PuzzleError> {
    fs::read_to_string(path).map_err(|source| PuzzleError::FileNotFound {
        path: path.to_owned(),
        source,
    })
}

/// A computed answer, along with which puzzle it answers
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Answer {
    /// Day of the puzzle
    pub day: u8,
    /// Which part was solved
    pub part: Part,
    /// The answer itself
    pub value: i64,
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solution to Day {:02}, part {} is {}",
            self.day, self.part, self.value
        )
    }
}

impl Puzzle {
    /// The solver for `part`
    pub fn solution(&self, part: Part) -> Solution {
        match part {
            Part::One => self.part_one,
            Part::Two => self.part_two,
        }
    }

    /// Solve `part` of this puzzle for `input`
    pub fn solve(&self, part: Part, input: &str) -> Result<Answer, PuzzleError> {
        let value = (self.solution(part))(input)?;
        info!("day {} part {part}: {value}", self.day);
        Ok(Answer {
            day: self.day,
            part,
            value,
        })
    }

    /// Solve both parts for `input`, stopping at the first error
    pub fn solve_all(&self, input: &str) -> Result<[Answer; 2], PuzzleError> {
        Ok([
            self.solve(Part::One, input)?,
            self.solve(Part::Two, input)?,
        ])
    }

    /// Where this puzzle's input is expected to live within `dir`
    ///
    /// ```
    /// use std::path::Path;
    /// let day = aoc::registry::lookup(2).unwrap();
    /// assert_eq!(day.input_path(Path::new("inputs")), Path::new("inputs/day_02.txt"));
    /// ```
    pub fn input_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("day_{:02}.txt", self.day))
    }

    /// Read this puzzle's input from `dir`
    pub fn read_input(&self, dir: &Path) -> Result<String, PuzzleError> {
        read_input_file(&self.input_path(dir))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {:02}: {}", self.day, self.title)
    }
}
