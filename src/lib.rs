/*
 * Shared runtime for the daily solutions.
 * Prefer `./helpers.rs` if you want to extract code from your solutions.
 */
use std::env;
use std::fs;

pub mod helpers;

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Prints like [`println!`], but only in debug builds.
#[macro_export]
macro_rules! debugln {
    ($($tt:tt)*) => {
        if cfg!(debug_assertions) {
            println!($($tt)*);
        }
    };
}

/// Prints like [`print!`], but only in debug builds.
#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => {
        if cfg!(debug_assertions) {
            print!($($tt)*);
        }
    };
}

#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:ident, $input:expr) => {{
        use $crate::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};
        use std::fmt::Display;
        use std::time::Instant;

        fn print_result<T: Display>(func: impl FnOnce(&str) -> Option<T>, input: &str) {
            let timer = Instant::now();
            let result = func(input);
            let elapsed = timer.elapsed();
            match result {
                Some(result) => {
                    println!(
                        "{} {}(elapsed: {:.2?}){}",
                        result, ANSI_ITALIC, elapsed, ANSI_RESET
                    );
                }
                None => {
                    println!("not solved.")
                }
            }
        }

        println!("🎄 {}Part {}{} 🎄", ANSI_BOLD, $part, ANSI_RESET);
        print_result($solver, $input);
    }};
}

/// Reads `src/<folder>/<day>.txt`, e.g. `src/examples/05.txt`.
pub fn read_file(folder: &str, day: u8) -> String {
    let cwd = env::current_dir().unwrap();

    let filepath = cwd.join("src").join(folder).join(format!("{day:02}.txt"));

    let f = fs::read_to_string(&filepath);
    f.unwrap_or_else(|err| panic!("could not open {}: {err}", filepath.display()))
}

fn parse_time(val: &str, postfix: &str) -> f64 {
    val.split(postfix)
        .next()
        .and_then(|number| number.trim().parse().ok())
        .unwrap_or(0_f64)
}

/// Sums the `(elapsed: ...)` timings printed by [`solve!`], in milliseconds.
pub fn parse_exec_time(output: &str) -> f64 {
    output.lines().fold(0_f64, |acc, l| {
        let Some(timing) = l.split("(elapsed: ").nth(1) else {
            return acc;
        };
        // `contains` rather than `ends_with`: the line ends in an ANSI escape.
        if timing.contains("ns)") {
            acc
        } else if timing.contains("µs)") {
            acc + parse_time(timing, "µs") / 1000_f64
        } else if timing.contains("ms)") {
            acc + parse_time(timing, "ms")
        } else if timing.contains("s)") {
            acc + parse_time(timing, "s") * 1000_f64
        } else {
            acc
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_approx_eq(left: f64, right: f64) {
        assert!(
            (left - right).abs() < 1e-6,
            "assertion failed: `(left ≈ right)`\n  left: `{left:?}`,\n right: `{right:?}`"
        );
    }

    #[test]
    fn test_parse_exec_time() {
        assert_approx_eq(
            parse_exec_time(&format!(
                "🎄 Part 1 🎄\n0 (elapsed: 74.13ns){ANSI_RESET}\n🎄 Part 2 🎄\n0 (elapsed: 50.00ns){ANSI_RESET}"
            )),
            0_f64,
        );

        assert_approx_eq(
            parse_exec_time("🎄 Part 1 🎄\n0 (elapsed: 755µs)\n🎄 Part 2 🎄\n0 (elapsed: 700µs)"),
            1.455_f64,
        );

        assert_approx_eq(
            parse_exec_time("🎄 Part 1 🎄\n0 (elapsed: 70µs)\n🎄 Part 2 🎄\n0 (elapsed: 1.45ms)"),
            1.52_f64,
        );

        assert_approx_eq(
            parse_exec_time(
                "🎄 Part 1 🎄\n0 (elapsed: 10.3s)\n🎄 Part 2 🎄\n0 (elapsed: 100.50ms)",
            ),
            10400.50_f64,
        );
    }

    #[test]
    fn test_parse_exec_time_skips_unsolved() {
        assert_approx_eq(
            parse_exec_time("🎄 Part 1 🎄\nnot solved.\n🎄 Part 2 🎄\n0 (elapsed: 2ms)"),
            2_f64,
        );
    }
}
