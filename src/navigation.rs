// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Steering the submarine for [Day 2]
//!
//! A planned course is a list of [Instruction]s, each pairing a [Direction] with a magnitude. A
//! [Navigator] folds them, in order, into a [Position] according to its [Policy]. The answer to
//! either part of the puzzle is the final horizontal position multiplied by the final depth.
//!
//! # Example
//!
//! ```rust
//! use aoc::navigation::{Direction, Instruction, Policy, navigate};
//!
//! let course = [
//!     Instruction::new(Direction::Down, 3),
//!     Instruction::new(Direction::Forward, 4),
//! ];
//! assert_eq!(navigate(Policy::Simple, &course).unwrap().product(), Ok(12));
//! assert_eq!(navigate(Policy::Aimed, &course).unwrap().product(), Ok(48));
//! ```
//!
//! [Day 2]: https://adventofcode.com/2021/day/2

use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;

use crate::PuzzleError;
use crate::parse::parse_instructions;

pub mod trace;

use trace::Trace;

/// The direction word of an [Instruction]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    /// Move ahead. What that does to depth depends on the [Policy].
    Forward,
    /// Dive, or tilt the nose down under [Policy::Aimed]
    Down,
    /// Rise, or tilt the nose up under [Policy::Aimed]
    Up,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "down" => Ok(Self::Down),
            "up" => Ok(Self::Up),
            _ => Err(s.to_owned()),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "forward",
            Self::Down => "down",
            Self::Up => "up",
        })
    }
}

/// A single step of the planned course
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Instruction {
    /// Which way to go
    pub direction: Direction,
    /// How far to go. Never negative when produced by the parser.
    pub magnitude: i64,
}

impl Instruction {
    /// Pair `direction` with `magnitude`
    pub const fn new(direction: Direction, magnitude: i64) -> Self {
        Self {
            direction,
            magnitude,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.magnitude)
    }
}

/// The submarine's state while following a course
///
/// `aim` stays at `0` under [Policy::Simple].
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Position {
    /// Distance travelled forward
    pub horizontal: i64,
    /// Distance below the surface. Under [Policy::Simple] this may become negative.
    pub depth: i64,
    /// How much each unit of forward travel changes the depth
    pub aim: i64,
}

impl Position {
    /// The puzzle answer for this position: horizontal position times depth
    pub fn product(&self) -> Result<i64, PuzzleError> {
        self.horizontal
            .checked_mul(self.depth)
            .ok_or(PuzzleError::Overflow)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "horizontal {}, depth {}, aim {}",
            self.horizontal, self.depth, self.aim
        )
    }
}

/// How an [Instruction] changes a [Position]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Policy {
    /// The first reading of the submarine manual
    ///
    /// * `forward n` increases the horizontal position by `n`
    /// * `down n` increases the depth by `n`
    /// * `up n` decreases the depth by `n`, with no floor at the surface
    Simple,
    /// The corrected reading of the manual, which tracks an aim
    ///
    /// * `down n` increases the aim by `n`
    /// * `up n` decreases the aim by `n`
    /// * `forward n` increases the horizontal position by `n`, and the depth by `aim * n`
    Aimed,
}

/// Shorthand for a checked addition that bails out with [PuzzleError::Overflow]
macro_rules! add {
    ($lhs: expr, $rhs: expr) => {{ $lhs.checked_add($rhs).ok_or(PuzzleError::Overflow)? }};
}

impl Policy {
    /// Apply a `forward` of `n` to `pos`
    pub fn on_forward(self, pos: &mut Position, n: i64) -> Result<(), PuzzleError> {
        match self {
            Self::Simple => pos.horizontal = add!(pos.horizontal, n),
            Self::Aimed => {
                let descent = pos.aim.checked_mul(n).ok_or(PuzzleError::Overflow)?;
                pos.horizontal = add!(pos.horizontal, n);
                pos.depth = add!(pos.depth, descent);
            }
        }
        Ok(())
    }

    /// Apply a `down` of `n` to `pos`
    pub fn on_down(self, pos: &mut Position, n: i64) -> Result<(), PuzzleError> {
        match self {
            Self::Simple => pos.depth = add!(pos.depth, n),
            Self::Aimed => pos.aim = add!(pos.aim, n),
        }
        Ok(())
    }

    /// Apply an `up` of `n` to `pos`
    pub fn on_up(self, pos: &mut Position, n: i64) -> Result<(), PuzzleError> {
        let n = n.checked_neg().ok_or(PuzzleError::Overflow)?;
        match self {
            Self::Simple => pos.depth = add!(pos.depth, n),
            Self::Aimed => pos.aim = add!(pos.aim, n),
        }
        Ok(())
    }

    /// Apply `instruction` to `pos`, dispatching on its direction
    ///
    /// On error, `pos` may have been partially updated.
    pub fn apply(self, pos: &mut Position, instruction: Instruction) -> Result<(), PuzzleError> {
        let Instruction {
            direction,
            magnitude,
        } = instruction;
        match direction {
            Direction::Forward => self.on_forward(pos, magnitude),
            Direction::Down => self.on_down(pos, magnitude),
            Direction::Up => self.on_up(pos, magnitude),
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Simple => "simple",
            Self::Aimed => "aimed",
        })
    }
}

/// Follows a course one instruction at a time, with optional tracing of each step
#[derive(Debug, Clone)]
pub struct Navigator {
    policy: Policy,
    position: Position,
    steps: usize,
    trace: Option<Trace>,
}

// ignore the trace field
impl PartialEq for Navigator {
    fn eq(&self, other: &Self) -> bool {
        self.policy == other.policy && self.position == other.position && self.steps == other.steps
    }
}

impl Navigator {
    /// Create a navigator at the surface, with everything set to `0`
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            position: Position::default(),
            steps: 0,
            trace: None,
        }
    }

    /// The policy this navigator was created with
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of instructions applied so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The puzzle answer for the current position
    pub fn product(&self) -> Result<i64, PuzzleError> {
        self.position.product()
    }

    /// Apply a single instruction
    ///
    /// If it would overflow, returns [PuzzleError::Overflow] and leaves the navigator unchanged.
    pub fn step(&mut self, instruction: Instruction) -> Result<(), PuzzleError> {
        let before = self.position;
        let mut after = before;
        self.policy.apply(&mut after, instruction)?;
        log::trace!(
            "step {:>5} | {:<12} | {after}",
            self.steps,
            instruction.to_string()
        );
        if let Some(trace) = self.trace.as_mut() {
            trace.push(self.steps, instruction, before, after);
        }
        self.position = after;
        self.steps += 1;
        Ok(())
    }

    /// Apply every instruction in order, stopping at the first error
    pub fn run(
        &mut self,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> Result<Position, PuzzleError> {
        for instruction in instructions {
            self.step(instruction)?;
        }
        debug!(
            "{} navigation finished after {} steps at {}",
            self.policy, self.steps, self.position
        );
        Ok(self.position)
    }
}

/// Follow `course` from the surface under `policy`, returning the final position
pub fn navigate(policy: Policy, course: &[Instruction]) -> Result<Position, PuzzleError> {
    Navigator::new(policy).run(course.iter().copied())
}

/// Parse `input` as a course and return the product for `policy`
fn solve(input: &str, policy: Policy) -> Result<i64, PuzzleError> {
    let course = parse_instructions(input)?;
    navigate(policy, &course)?.product()
}

/// Day 2, part 1: follow the course under [Policy::Simple]
pub fn part_one(input: &str) -> Result<i64, PuzzleError> {
    solve(input, Policy::Simple)
}

/// Day 2, part 2: follow the course under [Policy::Aimed]
pub fn part_two(input: &str) -> Result<i64, PuzzleError> {
    solve(input, Policy::Aimed)
}
