#![doc = include_str!("../puzzles/12.md")]

use std::collections::HashMap;
use std::fmt;

use advent_of_code_2023::debugln;
use itertools::Itertools;

const OPERATIONAL: u8 = b'.';
const DAMAGED: u8 = b'#';
const UNKNOWN: u8 = b'?';

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    pub springs: Vec<u8>,
    pub groups: Vec<usize>,
}

impl Row {
    pub fn parse(line: &str) -> Option<Self> {
        let (springs, groups) = line.split_once(' ')?;
        let springs = springs.as_bytes().to_vec();
        if !springs
            .iter()
            .all(|&s| matches!(s, OPERATIONAL | DAMAGED | UNKNOWN))
        {
            return None;
        }
        let groups = groups
            .trim()
            .split(',')
            .map(|n| n.parse().ok())
            .collect::<Option<_>>()?;
        Some(Self { springs, groups })
    }

    /// Repeats the springs `times` times joined by `?`, and the groups
    /// `times` times.
    pub fn unfold(&self, times: usize) -> Self {
        let mut springs = self.springs.clone();
        for _ in 1..times {
            springs.push(UNKNOWN);
            springs.extend_from_slice(&self.springs);
        }
        let groups = self.groups.repeat(times);
        Self { springs, groups }
    }

    pub fn arrangements(&self) -> u64 {
        let mut counter = Arrangements {
            row: self,
            cache: HashMap::new(),
        };
        let count = counter.count(0, 0);
        debugln!("{self}: {count}");
        count
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &spring in self.springs.iter() {
            write!(f, "{}", spring as char)?;
        }
        write!(f, " {}", self.groups.iter().join(","))
    }
}

/// Memoised count of the arrangements of one row.
struct Arrangements<'a> {
    row: &'a Row,
    /// Keyed by (spring index, group index).
    cache: HashMap<(usize, usize), u64>,
}

impl<'a> Arrangements<'a> {
    /// Number of ways to place `groups[group..]` in `springs[spring..]`.
    fn count(&mut self, spring: usize, group: usize) -> u64 {
        if let Some(&count) = self.cache.get(&(spring, group)) {
            return count;
        }

        let springs = &self.row.springs;
        let groups = &self.row.groups;

        let count = match springs.get(spring) {
            None => u64::from(group == groups.len()),
            Some(&current) => {
                let mut count = 0;
                if current != DAMAGED {
                    count += self.count(spring + 1, group);
                }
                if current != OPERATIONAL && self.fits(spring, group) {
                    let end = spring + groups[group];
                    // The spring after the group, if any, must be operational.
                    count += self.count((end + 1).min(springs.len()), group + 1);
                }
                count
            }
        };

        self.cache.insert((spring, group), count);
        count
    }

    /// Whether group `group` can start at `spring`.
    fn fits(&self, spring: usize, group: usize) -> bool {
        let springs = &self.row.springs;
        let Some(&len) = self.row.groups.get(group) else {
            return false;
        };
        let end = spring + len;
        end <= springs.len()
            && springs[spring..end].iter().all(|&s| s != OPERATIONAL)
            && springs.get(end) != Some(&DAMAGED)
    }
}

fn parse_rows(input: &str) -> Option<Vec<Row>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(Row::parse)
        .collect()
}

/// Returns the total number of arrangements.
pub fn part_one(input: &str) -> Option<u64> {
    let rows = parse_rows(input)?;
    Some(rows.iter().map(Row::arrangements).sum())
}

/// Returns the total number of arrangements of the unfolded rows.
pub fn part_two(input: &str) -> Option<u64> {
    let rows = parse_rows(input)?;
    Some(rows.iter().map(|row| row.unfold(5).arrangements()).sum())
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 12);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 12);
        assert_eq!(part_one(&input), Some(21));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 12);
        assert_eq!(part_two(&input), Some(525152));
    }

    #[track_caller]
    fn check_arrangements(line: &str, folded: u64, unfolded: u64) {
        let row = Row::parse(line).unwrap();
        assert_eq!(row.arrangements(), folded, "{line}");
        assert_eq!(row.unfold(5).arrangements(), unfolded, "{line} unfolded");
    }

    #[test]
    fn test_arrangements() {
        check_arrangements("???.### 1,1,3", 1, 1);
        check_arrangements(".??..??...?##. 1,1,3", 4, 16384);
        check_arrangements("????.#...#... 4,1,1", 1, 16);
        check_arrangements("?###???????? 3,2,1", 10, 506250);
    }

    #[test]
    fn test_unfold() {
        let row = Row::parse(".# 1").unwrap();
        assert_eq!(row.unfold(2).to_string(), ".#?.# 1,1");
    }

    #[test]
    fn test_no_arrangement() {
        assert_eq!(Row::parse("### 1").unwrap().arrangements(), 0);
        assert_eq!(Row::parse("... 1").unwrap().arrangements(), 0);
        assert_eq!(Row::parse("?x? 1"), None);
    }
}
