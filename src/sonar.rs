// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Sonar sweep reports for [Day 1]
//!
//! [Day 1]: https://adventofcode.com/2021/day/1

use itertools::Itertools;
use log::debug;

use crate::PuzzleError;
use crate::parse::parse_readings;

/// Number of readings summed into each window for part 2
pub const WINDOW: usize = 3;

/// Count the readings that are strictly larger than the one before them
///
/// The first reading has nothing before it, so fewer than two readings always count `0`.
///
/// ```
/// use aoc::sonar::count_increases;
/// assert_eq!(count_increases(&[3, 4, 4, 1, 2]), 2);
/// assert_eq!(count_increases(&[]), 0);
/// ```
pub fn count_increases(readings: &[i64]) -> usize {
    readings
        .iter()
        .tuple_windows()
        .filter(|(prev, next)| next > prev)
        .count()
}

/// Sums of every run of `width` consecutive readings, in order
///
/// Empty if there are fewer than `width` readings. Panics if `width` is `0`.
pub fn window_sums(readings: &[i64], width: usize) -> Result<Vec<i64>, PuzzleError> {
    readings
        .windows(width)
        .map(|w| {
            w.iter()
                .try_fold(0i64, |acc, &r| acc.checked_add(r))
                .ok_or(PuzzleError::Overflow)
        })
        .collect()
}

/// Count how often the sum of a sliding window of [WINDOW] readings increases
///
/// With fewer than [WINDOW] readings there is no window to compare, which is reported as
/// [PuzzleError::EmptyInput] rather than a count of `0`.
pub fn count_window_increases(readings: &[i64]) -> Result<usize, PuzzleError> {
    if readings.len() < WINDOW {
        return Err(PuzzleError::EmptyInput {
            needed: WINDOW,
            found: readings.len(),
        });
    }
    Ok(count_increases(&window_sums(readings, WINDOW)?))
}

fn to_answer(count: usize) -> Result<i64, PuzzleError> {
    i64::try_from(count).map_err(|_| PuzzleError::Overflow)
}

/// Day 1, part 1: how many readings are larger than the previous one
pub fn part_one(input: &str) -> Result<i64, PuzzleError> {
    let readings = parse_readings(input)?;
    debug!("counting increases over {} readings", readings.len());
    to_answer(count_increases(&readings))
}

/// Day 1, part 2: how many three-reading windows sum larger than the previous window
pub fn part_two(input: &str) -> Result<i64, PuzzleError> {
    let readings = parse_readings(input)?;
    debug!("counting window increases over {} readings", readings.len());
    to_answer(count_window_increases(&readings)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_readings_do_not_count() {
        assert_eq!(count_increases(&[5, 5, 5]), 0);
        assert_eq!(count_increases(&[5, 6, 6, 7]), 2);
    }

    #[test]
    fn single_reading_has_no_increases() {
        assert_eq!(count_increases(&[42]), 0);
    }

    #[test]
    fn negative_readings() {
        assert_eq!(count_increases(&[-3, -2, -5, 0]), 2);
    }

    #[test]
    fn window_sums_in_order() {
        assert_eq!(window_sums(&[1, 2, 3, 4], 3), Ok(vec![6, 9]));
        assert_eq!(window_sums(&[1, 2], 3), Ok(vec![]));
        assert_eq!(window_sums(&[1, 2], 1), Ok(vec![1, 2]));
    }

    #[test]
    fn window_sum_overflow() {
        assert_eq!(
            window_sums(&[i64::MAX, 1, 0], 3),
            Err(PuzzleError::Overflow)
        );
    }

    #[test]
    fn too_few_readings_for_a_window() {
        let cases: [&[i64]; 3] = [&[], &[1], &[1, 2]];
        for readings in cases {
            assert_eq!(
                count_window_increases(readings),
                Err(PuzzleError::EmptyInput {
                    needed: 3,
                    found: readings.len()
                })
            );
        }
        // one window, nothing to compare it to
        assert_eq!(count_window_increases(&[1, 2, 3]), Ok(0));
    }

    #[test]
    fn empty_input_for_part_one_is_zero() {
        assert_eq!(part_one(""), Ok(0));
    }
}
