//! Test that examples from Advent of Code problem descriptions behave as described.
// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use aoc::navigation::trace::{Trace, TracedStep};
use aoc::prelude::*;
use aoc::sonar::{count_increases, count_window_increases, window_sums};
use itertools::Itertools;

// first, some groundwork for common elements of different tests

const SONAR_REPORT: &str = "199
200
208
210
200
207
240
269
260
263
";

const PLANNED_COURSE: &str = "forward 5
down 5
forward 8
up 3
down 8
forward 2
";

/// Construct a course from `direction magnitude` pairs
macro_rules! course {
    [$($dir: ident $n: literal),* $(,)?] => {{
        vec![$(Instruction::new(Direction::$dir, $n)),*]
    }}
}

/// Follow `course` under `policy` with a fresh navigator, tracing every step
fn traced_run(policy: Policy, course: &[Instruction]) -> (Position, Trace) {
    let mut nav = Navigator::new(policy);
    nav.start_trace();
    let pos = nav.run(course.iter().copied()).unwrap();
    (pos, nav.end_trace().unwrap())
}

/// The (horizontal, depth, aim) expected after a traced step
struct ExpectedStep(i64, i64, i64);

impl ExpectedStep {
    fn validate(self, traced: TracedStep) {
        let Position {
            horizontal,
            depth,
            aim,
        } = traced.after();
        assert_eq!(
            (self.0, self.1, self.2),
            (horizontal, depth, aim),
            "after {}",
            traced.instruction()
        );
    }
}

fn validate_trace(expected: impl IntoIterator<Item = ExpectedStep>, Trace(trace): Trace) {
    expected
        .into_iter()
        .zip_eq(trace)
        .for_each(|(step, traced)| step.validate(traced))
}

mod day1_examples {
    mod part1 {
        use crate::*;

        /// > In this example, there are 7 measurements that are larger than the previous
        /// > measurement.
        #[test]
        fn seven_increases() {
            let readings = parse_readings(SONAR_REPORT).unwrap();
            assert_eq!(readings.len(), 10);
            assert_eq!(count_increases(&readings), 7);
        }

        #[test]
        fn through_registry() {
            let answer = lookup(1).unwrap().solve(Part::One, SONAR_REPORT).unwrap();
            assert_eq!(answer.value, 7);
            assert_eq!(answer.to_string(), "Solution to Day 01, part 1 is 7");
        }
    }

    mod part2 {
        use crate::*;

        /// the labelled windows A through H from the puzzle description
        #[test]
        fn window_sums_match_description() {
            let readings = parse_readings(SONAR_REPORT).unwrap();
            assert_eq!(
                window_sums(&readings, 3),
                Ok(vec![607, 618, 618, 617, 647, 716, 769, 792])
            );
        }

        /// > In this example, there are 5 sums that are larger than the previous sum.
        #[test]
        fn five_increases() {
            let readings = parse_readings(SONAR_REPORT).unwrap();
            assert_eq!(count_window_increases(&readings), Ok(5));
            assert_eq!(
                lookup(1).unwrap().solve(Part::Two, SONAR_REPORT).unwrap().value,
                5
            );
        }

        #[test]
        fn too_short_for_a_window() {
            assert_eq!(
                lookup(1).unwrap().solve(Part::Two, "199\n200\n"),
                Err(PuzzleError::EmptyInput {
                    needed: 3,
                    found: 2
                })
            );
        }
    }
}

mod day2_examples {
    mod part1 {
        use crate::*;

        /// > After following these instructions, you would have a horizontal position of 15 and
        /// > a depth of 10. (Multiplying these together produces 150.)
        #[test]
        fn planned_course() {
            let course = parse_instructions(PLANNED_COURSE).unwrap();
            let (pos, trace) = traced_run(Policy::Simple, &course);
            assert_eq!((pos.horizontal, pos.depth), (15, 10));
            assert_eq!(pos.product(), Ok(150));
            const EXPECTED: [ExpectedStep; 6] = [
                ExpectedStep(5, 0, 0),
                ExpectedStep(5, 5, 0),
                ExpectedStep(13, 5, 0),
                ExpectedStep(13, 2, 0),
                ExpectedStep(13, 10, 0),
                ExpectedStep(15, 10, 0),
            ];
            validate_trace(EXPECTED, trace);
        }

        #[test]
        fn through_registry() {
            let answer = lookup(2).unwrap().solve(Part::One, PLANNED_COURSE).unwrap();
            assert_eq!(answer.to_string(), "Solution to Day 02, part 1 is 150");
        }
    }

    mod part2 {
        use crate::*;

        /// each step of the walkthrough in the puzzle description
        #[test]
        fn planned_course() {
            let course = parse_instructions(PLANNED_COURSE).unwrap();
            let (pos, trace) = traced_run(Policy::Aimed, &course);
            assert_eq!((pos.horizontal, pos.depth), (15, 60));
            assert_eq!(pos.product(), Ok(900));
            const EXPECTED: [ExpectedStep; 6] = [
                ExpectedStep(5, 0, 0),
                ExpectedStep(5, 0, 5),
                ExpectedStep(13, 40, 5),
                ExpectedStep(13, 40, 2),
                ExpectedStep(13, 40, 10),
                ExpectedStep(15, 60, 10),
            ];
            validate_trace(EXPECTED, trace);
        }

        #[test]
        fn through_registry() {
            let answer = lookup(2).unwrap().solve(Part::Two, PLANNED_COURSE).unwrap();
            assert_eq!(answer.to_string(), "Solution to Day 02, part 2 is 900");
        }
    }
}

mod navigation_properties {
    use crate::*;

    /// the six steps of the example course followed by three more
    #[test]
    fn extended_course() {
        let course = course![
            Forward 5, Down 5, Forward 8, Up 3, Down 8, Forward 2, Up 5, Down 10, Forward 2,
        ];
        let simple = navigate(Policy::Simple, &course).unwrap();
        assert_eq!((simple.horizontal, simple.depth), (17, 15));
        assert_eq!(simple.product(), Ok(255));
        let aimed = navigate(Policy::Aimed, &course).unwrap();
        assert_eq!((aimed.horizontal, aimed.depth), (17, 90));
        assert_eq!(aimed.product(), Ok(1530));
    }

    #[test]
    fn rerunning_is_deterministic() {
        let course = parse_instructions(PLANNED_COURSE).unwrap();
        for policy in [Policy::Simple, Policy::Aimed] {
            let first = navigate(policy, &course).unwrap();
            let second = navigate(policy, &course).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn policies_agree_until_aim_matters() {
        let forwards = course![Forward 3, Forward 4];
        assert_eq!(
            navigate(Policy::Simple, &forwards),
            navigate(Policy::Aimed, &forwards)
        );

        // diving before moving forward makes the depths differ
        let dive_first = course![Down 2, Forward 3];
        let simple = navigate(Policy::Simple, &dive_first).unwrap();
        let aimed = navigate(Policy::Aimed, &dive_first).unwrap();
        assert_ne!(simple.depth, aimed.depth);

        // rising back to level before moving forward leaves the aimed depth at zero
        let level_out = course![Down 2, Up 2, Forward 3];
        let aimed = navigate(Policy::Aimed, &level_out).unwrap();
        assert_eq!(aimed.depth, 0);
    }

    #[test]
    fn empty_course() {
        for (policy, part) in [(Policy::Simple, Part::One), (Policy::Aimed, Part::Two)] {
            assert_eq!(lookup(2).unwrap().solve(part, "\n\n").unwrap().value, 0);
            assert_eq!(navigate(policy, &[]).unwrap().product(), Ok(0));
        }
    }

    #[test]
    fn bad_direction_fails_the_whole_run() {
        let err = lookup(2)
            .unwrap()
            .solve(Part::Two, "forward 5\nsideways 2\nforward 1\n")
            .unwrap_err();
        let err = match err {
            PuzzleError::Parse(err) => err,
            other => panic!("expected a parse error, got {other:?}"),
        };
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidInstruction(String::from("sideways"))
        );
        assert_eq!(err.line, 2);
        assert_eq!(err.span, 10..18);
    }
}
