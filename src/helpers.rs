/*
 * Helpers shared by the daily solutions.
 * Example import from this file: `use advent_of_code_2023::helpers::CharGrid;`.
 */

pub mod grid;
pub mod math;
pub mod parse;

pub use grid::{CharGrid, Direction, Pos};

pub trait Itertools: Iterator {
    /// Groups lines into blocks separated by (runs of) blank lines.
    ///
    /// Blank lines themselves never show up in the output, so neither leading
    /// nor trailing blank lines produce empty blocks.
    fn blocks<'a>(self) -> Vec<Vec<&'a str>>
    where
        Self: Iterator<Item = &'a str> + Sized,
    {
        let groups = itertools::Itertools::group_by(self, |line: &&str| line.trim().is_empty());
        let blocks = (&groups)
            .into_iter()
            .filter_map(|(is_blank, group)| (!is_blank).then(|| group.collect()))
            .collect();
        blocks
    }
}

impl<I: Iterator> Itertools for I {}

#[cfg(test)]
mod tests {
    use super::Itertools;

    #[track_caller]
    fn run_blocks_test(input: &str, expected: Vec<Vec<&str>>) {
        assert_eq!(input.lines().blocks(), expected);
    }

    #[test]
    fn empty() {
        run_blocks_test("", vec![]);
        run_blocks_test("\n\n", vec![]);
    }

    #[test]
    fn single_block() {
        run_blocks_test("a\nb", vec![vec!["a", "b"]]);
        run_blocks_test("a\nb\n", vec![vec!["a", "b"]]);
    }

    #[test]
    fn separated_blocks() {
        run_blocks_test("a\n\nb\nc", vec![vec!["a"], vec!["b", "c"]]);
        run_blocks_test("\na\n\n\nb\n\n", vec![vec!["a"], vec!["b"]]);
    }
}
