/*
 * Runs the daily solutions and sums up how long they took.
 * Use `cargo run --bin <DD>` to run a single day directly.
 */
use std::ops::RangeInclusive;
use std::process::{self, Command};

use advent_of_code_2023::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};
use prettytable::{row, Table};

const DAYS: RangeInclusive<u8> = 1..=20;

const HELP: &str = "\
Runs the solutions of every day and prints how long each one took.

USAGE:
  cargo run -- [OPTIONS]

OPTIONS:
  --day <DAY>   Only run the solution of day DAY (1-20)
  --debug       Build the solutions without --release, enabling debug output
  -h, --help    Print this help
";

#[derive(Debug)]
struct Args {
    day: Option<u8>,
    debug: bool,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        process::exit(0);
    }

    let args = Args {
        day: pargs.opt_value_from_str("--day")?,
        debug: pargs.contains("--debug"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }

    Ok(args)
}

/// Runs the binary of `day`, echoing its output.
///
/// Returns the time the day's parts reported taking, in milliseconds, or
/// `None` if the day could not be run or printed nothing.
fn run_day(day: u8, debug: bool) -> Option<f64> {
    let bin = format!("{day:02}");
    let mut cargo_args = vec!["run"];
    if !debug {
        cargo_args.push("--release");
    }
    cargo_args.extend(["--quiet", "--bin", bin.as_str()]);

    println!("----------");
    println!("{ANSI_BOLD}| Day {bin} |{ANSI_RESET}");
    println!("----------");

    let output = match Command::new("cargo").args(&cargo_args).output() {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Failed to run day {bin}: {err}");
            return None;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() || stdout.trim().is_empty() {
        println!("Not solved.");
        return None;
    }

    println!("{}", stdout.trim());
    Some(advent_of_code_2023::parse_exec_time(&stdout))
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            process::exit(1);
        }
    };

    let days: Vec<u8> = match args.day {
        Some(day) if DAYS.contains(&day) => vec![day],
        Some(day) => {
            eprintln!("Error: there is no solution for day {day}");
            process::exit(1);
        }
        None => DAYS.collect(),
    };

    let mut table = Table::new();
    table.set_titles(row!["Day", "Time (ms)"]);

    let mut total = 0_f64;
    for day in days {
        match run_day(day, args.debug) {
            Some(elapsed) => {
                total += elapsed;
                table.add_row(row![day, format!("{elapsed:.2}")]);
            }
            None => {
                table.add_row(row![day, "-"]);
            }
        }
    }
    table.add_row(row!["Total", format!("{total:.2}")]);

    println!();
    table.printstd();
    println!("{ANSI_BOLD}Total:{ANSI_RESET} {ANSI_ITALIC}{total:.2}ms{ANSI_RESET}");
}
