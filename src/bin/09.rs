#![doc = include_str!("../puzzles/09.md")]

use advent_of_code_2023::{debugln, helpers::parse};
use itertools::Itertools;

/// A history and its successive differences, down to a row of zeroes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pyramid {
    rows: Vec<Vec<i64>>,
}

impl Pyramid {
    pub fn new(history: Vec<i64>) -> Self {
        let mut rows = vec![history];
        while let Some(last) = rows.last() {
            if last.iter().all(|&value| value == 0) {
                break;
            }
            let next = last.iter().tuple_windows().map(|(a, b)| b - a).collect();
            rows.push(next);
        }
        Self { rows }
    }

    pub fn next_value(&self) -> i64 {
        self.rows
            .iter()
            .rev()
            .fold(0, |below, row| row.last().copied().unwrap_or(0) + below)
    }

    pub fn previous_value(&self) -> i64 {
        self.rows
            .iter()
            .rev()
            .fold(0, |below, row| row.first().copied().unwrap_or(0) - below)
    }
}

fn parse_pyramids(input: &str) -> Option<Vec<Pyramid>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let history = parse::words(line)?;
            let pyramid = Pyramid::new(history);
            debugln!("{} rows: {line}", pyramid.rows.len());
            Some(pyramid)
        })
        .collect()
}

/// Returns the sum of the extrapolated next values.
pub fn part_one(input: &str) -> Option<i64> {
    let pyramids = parse_pyramids(input)?;
    Some(pyramids.iter().map(Pyramid::next_value).sum())
}

/// Returns the sum of the extrapolated previous values.
pub fn part_two(input: &str) -> Option<i64> {
    let pyramids = parse_pyramids(input)?;
    Some(pyramids.iter().map(Pyramid::previous_value).sum())
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 9);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 9);
        assert_eq!(part_one(&input), Some(114));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 9);
        assert_eq!(part_two(&input), Some(2));
    }

    #[test]
    fn test_pyramid() {
        let pyramid = Pyramid::new(vec![10, 13, 16, 21, 30, 45]);
        assert_eq!(pyramid.rows.len(), 5);
        assert_eq!(pyramid.next_value(), 68);
        assert_eq!(pyramid.previous_value(), 5);
    }

    #[test]
    fn test_negative_and_short_histories() {
        assert_eq!(Pyramid::new(vec![-3, -6, -9]).next_value(), -12);
        assert_eq!(Pyramid::new(vec![7]).next_value(), 7);
        assert_eq!(Pyramid::new(vec![7]).previous_value(), 7);
        assert_eq!(part_one("1 x 3"), None);
    }
}
