// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Solve a day's puzzle from its input file, printing one line per part

use std::path::PathBuf;
use std::process::ExitCode;

use aoc::prelude::*;
use aoc::registry::{PUZZLES, read_input_file};
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use clap::Parser;
use log::LevelFilter;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const DIR_HELP: &str = "Directory holding the puzzle inputs\nthe input for day N is read from day_NN.txt within it";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Advent of Code 2021 solver", long_about = None)]
struct Args {
    #[arg(help = "Day of the puzzle to solve")]
    #[arg(required_unless_present = "list")]
    day: Option<u8>,
    #[arg(help = "Only solve this part of the puzzle")]
    #[arg(short, long)]
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
    #[arg(help = "Read the input from this file instead of the input directory")]
    #[arg(short, long)]
    input: Option<PathBuf>,
    #[arg(help = DIR_HELP.split_at(35).0)]
    #[arg(long_help = DIR_HELP)]
    #[arg(short = 'd', long = "input-dir", env = "AOC_INPUT_DIR")]
    #[arg(default_value = "inputs")]
    input_dir: PathBuf,
    #[arg(help = "Log more detail; repeat for more")]
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[arg(help = "List the puzzles that can be solved, then exit")]
    #[arg(long)]
    list: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn report_parse_err(err: &ParseError, file: &str, source: &str) {
    let message = match &err.kind {
        ParseErrorKind::Syntax(reason) => reason.clone(),
        ParseErrorKind::MalformedInteger(digits) => format!(
            "{} does not fit in a 64-bit integer",
            digits.as_str().fg(Color::Cyan)
        ),
        ParseErrorKind::InvalidInstruction(word) => format!(
            "expected {}, {} or {}, found {}",
            "forward".fg(Color::Blue),
            "down".fg(Color::Blue),
            "up".fg(Color::Blue),
            word.as_str().fg(Color::Cyan)
        ),
    };

    Report::build(ReportKind::Error, (file, err.span.clone()))
        .with_message(format!(
            "Failed to parse line {} of {}",
            err.line,
            file.fg(Color::Red)
        ))
        .with_label(
            Label::new((file, err.span.clone()))
                .with_message(message)
                .with_color(Color::Yellow),
        )
        .finish()
        .eprint((file, Source::from(source)))
        .expect("failed to print to stderr");
}

fn list_puzzles() {
    for puzzle in PUZZLES {
        println!("{puzzle}");
    }
}

/// A failed run, with whatever context is available for reporting it
struct Failure {
    error: PuzzleError,
    path: Option<PathBuf>,
    source: Option<String>,
}

impl From<PuzzleError> for Failure {
    fn from(error: PuzzleError) -> Self {
        Self {
            error,
            path: None,
            source: None,
        }
    }
}

impl Failure {
    fn report(self) {
        match (self.error, self.path, self.source) {
            (PuzzleError::Parse(err), Some(path), Some(source)) => {
                report_parse_err(&err, &path.to_string_lossy(), &source)
            }
            (err, Some(path), _) => eprintln!("{}: {err}", path.display()),
            (err, None, _) => eprintln!("{err}"),
        }
    }
}

fn run(args: &Args, day: u8) -> Result<(), Failure> {
    let puzzle = lookup(day)?;
    let path = match args.input.as_deref() {
        Some(path) => path.to_owned(),
        None => puzzle.input_path(&args.input_dir),
    };
    let input = read_input_file(&path)?;

    let parts = match args.part.map(Part::try_from) {
        Some(Ok(part)) => vec![part],
        Some(Err(n)) => unreachable!("clap restricts --part to 1 or 2, got {n}"),
        None => Part::ALL.to_vec(),
    };
    for part in parts {
        match puzzle.solve(part, &input) {
            Ok(answer) => println!("{answer}"),
            Err(error) => {
                return Err(Failure {
                    error,
                    path: Some(path),
                    source: Some(input),
                });
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match (args.list, args.day) {
        (true, _) => {
            list_puzzles();
            ExitCode::SUCCESS
        }
        (false, Some(day)) => match run(&args, day) {
            Ok(()) => ExitCode::SUCCESS,
            Err(failure) => {
                failure.report();
                ExitCode::FAILURE
            }
        },
        (false, None) => unreachable!("clap requires a day unless --list is given"),
    }
}
