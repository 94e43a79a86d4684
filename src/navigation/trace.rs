// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Recording what a [Navigator] did, one instruction at a time
use std::fmt::{self, Display};

use super::{Instruction, Navigator, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A record of a single instruction that a [Navigator] applied, which can be queried with its
/// various methods, or converted into a [String] using its [Display] impl.
pub struct TracedStep {
    index: usize,
    instruction: Instruction,
    before: Position,
    after: Position,
}

impl TracedStep {
    /// Return how many instructions had been applied before this one
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return the instruction that was applied
    pub fn instruction(&self) -> Instruction {
        self.instruction
    }

    /// Return the position just before the instruction was applied
    pub fn before(&self) -> Position {
        self.before
    }

    /// Return the position just after the instruction was applied
    pub fn after(&self) -> Position {
        self.after
    }
}

impl Navigator {
    /// Begin a [Trace] of applied instructions. If a trace is already running, this replaces that
    /// trace and returns it in a [`Some`], otherwise, it returns [`None`].
    ///
    /// # Example
    /// ```
    ///# use aoc::prelude::*;
    /// let mut nav = Navigator::new(Policy::Simple);
    /// assert!(nav.start_trace().is_none());
    /// nav.step(Instruction::new(Direction::Down, 4)).unwrap();
    /// let trace = nav.end_trace().unwrap();
    /// assert_eq!(trace.0.len(), 1);
    /// assert_eq!(trace.0[0].after().depth, 4);
    /// ```
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::new())
    }

    /// Stop tracing applied instructions into a [Trace]. If no trace was active, returns [`None`]
    ///
    /// see [Navigator::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A log of instructions that a [Navigator] has applied since a call to
/// [Navigator::start_trace]
///
/// see [Navigator::start_trace]
pub struct Trace(pub Vec<TracedStep>);

impl Trace {
    pub(super) fn push(
        &mut self,
        index: usize,
        instruction: Instruction,
        before: Position,
        after: Position,
    ) {
        self.0.push(TracedStep {
            index,
            instruction,
            before,
            after,
        })
    }

    pub(super) fn new() -> Self {
        Self(Vec::new())
    }

    /// The positions visited, starting with the one before the first traced step
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.0
            .first()
            .map(TracedStep::before)
            .into_iter()
            .chain(self.0.iter().map(TracedStep::after))
    }
}

impl Display for TracedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {:0>4}: {: <12} | ",
            self.index,
            self.instruction.to_string()
        )?;

        macro_rules! field {
            ($name: ident) => {
                if self.before.$name == self.after.$name {
                    write!(f, "{} {}", stringify!($name), self.after.$name)
                } else {
                    write!(
                        f,
                        "{} {} -> {}",
                        stringify!($name),
                        self.before.$name,
                        self.after.$name
                    )
                }
            };
        }

        field!(horizontal)?;
        f.write_str(", ")?;
        field!(depth)?;
        f.write_str(", ")?;
        field!(aim)
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0 {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}
