#![doc = include_str!("../puzzles/13.md")]

use advent_of_code_2023::{
    debugln,
    helpers::{CharGrid, Itertools as _},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reflection {
    /// Between column `n - 1` and column `n`.
    Vertical(usize),
    /// Between row `n - 1` and row `n`.
    Horizontal(usize),
}

impl Reflection {
    pub fn summary(self) -> usize {
        match self {
            Reflection::Vertical(n) => n,
            Reflection::Horizontal(n) => 100 * n,
        }
    }
}

/// Finds the line among `len` rows (or columns) across which the mirrored
/// pairs differ in exactly `smudges` cells in total.
fn find_line(
    len: usize,
    smudges: usize,
    differences: impl Fn(usize, usize) -> usize,
) -> Option<usize> {
    (1..len).find(|&line| {
        let pairs = line.min(len - line);
        let mut total = 0;
        for k in 0..pairs {
            total += differences(line - 1 - k, line + k);
            if total > smudges {
                return false;
            }
        }
        total == smudges
    })
}

fn reflection(pattern: &CharGrid, smudges: usize) -> Option<Reflection> {
    let col_differences = |a: usize, b: usize| {
        let mismatched = pattern.col(a).zip(pattern.col(b)).filter(|(x, y)| x != y);
        mismatched.count()
    };
    let row_differences = |a: usize, b: usize| {
        let mismatched = pattern.row(a).zip(pattern.row(b)).filter(|(x, y)| x != y);
        mismatched.count()
    };

    let vertical = find_line(pattern.cols(), smudges, col_differences).map(Reflection::Vertical);
    vertical.or_else(|| {
        find_line(pattern.rows(), smudges, row_differences).map(Reflection::Horizontal)
    })
}

fn parse_patterns(input: &str) -> Option<Vec<CharGrid>> {
    input
        .lines()
        .map(str::trim_end)
        .blocks()
        .iter()
        .map(|lines| CharGrid::from_lines(lines))
        .collect()
}

fn summarize(input: &str, smudges: usize) -> Option<usize> {
    let patterns = parse_patterns(input)?;
    let summary = patterns
        .iter()
        .map(|pattern| {
            let reflection = reflection(pattern, smudges);
            debugln!("{pattern}\n=> {reflection:?}\n");
            reflection.map_or(0, Reflection::summary)
        })
        .sum();
    Some(summary)
}

/// Returns the summary of the reflection lines.
pub fn part_one(input: &str) -> Option<usize> {
    summarize(input, 0)
}

/// Returns the summary of the reflection lines once every smudge is fixed.
pub fn part_two(input: &str) -> Option<usize> {
    summarize(input, 1)
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 13);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 13);
        assert_eq!(part_one(&input), Some(405));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 13);
        assert_eq!(part_two(&input), Some(400));
    }

    #[test]
    fn test_reflections() {
        let input = advent_of_code_2023::read_file("examples", 13);
        let patterns = parse_patterns(&input).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(reflection(&patterns[0], 0), Some(Reflection::Vertical(5)));
        assert_eq!(reflection(&patterns[1], 0), Some(Reflection::Horizontal(4)));
        assert_eq!(reflection(&patterns[0], 1), Some(Reflection::Horizontal(3)));
        assert_eq!(reflection(&patterns[1], 1), Some(Reflection::Horizontal(1)));
    }

    #[test]
    fn test_no_reflection() {
        assert_eq!(part_one("#.\n..\n"), Some(0));
    }
}
