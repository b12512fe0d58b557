#![doc = include_str!("../puzzles/06.md")]

use advent_of_code_2023::{debugln, helpers::parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Race {
    pub time: u64,
    pub record: u64,
}

impl Race {
    #[inline]
    fn distance(&self, hold: u64) -> u64 {
        hold * (self.time - hold)
    }

    /// Counts the hold times that beat the record.
    ///
    /// The distance is a parabola symmetric around `time / 2`, so it is enough
    /// to binary search the shortest winning hold time on the rising half.
    pub fn ways_to_win(&self) -> u64 {
        let half = self.time / 2;
        if self.distance(half) <= self.record {
            return 0;
        }

        // Invariant: `lo` loses, `hi` wins.
        let (mut lo, mut hi) = (0, half);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.distance(mid) > self.record {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let ways = self.time - 2 * hi + 1;
        debugln!("{self:?}: shortest winning hold {hi}, {ways} ways");
        ways
    }
}

fn parse_line<'a>(line: Option<&'a str>, label: &str) -> Option<&'a str> {
    line?.strip_prefix(label)
}

fn parse_races(input: &str) -> Option<Vec<Race>> {
    let mut lines = input.lines();
    let times: Vec<u64> = parse::words(parse_line(lines.next(), "Time:")?)?;
    let records: Vec<u64> = parse::words(parse_line(lines.next(), "Distance:")?)?;
    if times.len() != records.len() {
        return None;
    }

    let races = times
        .into_iter()
        .zip(records)
        .map(|(time, record)| Race { time, record })
        .collect();
    Some(races)
}

fn parse_single_race(input: &str) -> Option<Race> {
    let mut lines = input.lines();
    let mut concatenated = |label: &str| -> Option<u64> {
        let line = parse_line(lines.next(), label)?;
        let digits: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        digits.parse().ok()
    };
    let time = concatenated("Time:")?;
    let record = concatenated("Distance:")?;
    Some(Race { time, record })
}

/// Returns the product of the number of ways to win each race.
pub fn part_one(input: &str) -> Option<u64> {
    let races = parse_races(input)?;
    Some(races.iter().map(Race::ways_to_win).product())
}

/// Returns the number of ways to win the one long race.
pub fn part_two(input: &str) -> Option<u64> {
    let race = parse_single_race(input)?;
    Some(race.ways_to_win())
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 6);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 6);
        assert_eq!(part_one(&input), Some(288));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 6);
        assert_eq!(part_two(&input), Some(71503));
    }

    #[track_caller]
    fn check_ways(time: u64, record: u64) {
        let brute_force = (0..=time).filter(|hold| hold * (time - hold) > record).count();
        assert_eq!(Race { time, record }.ways_to_win(), brute_force as u64);
    }

    #[test]
    fn test_ways_to_win_matches_brute_force() {
        for time in 0..40 {
            for record in [0, 1, 5, 9, 40, 99, 100, 200, 400] {
                check_ways(time, record);
            }
        }
    }

    #[test]
    fn test_mismatched_columns() {
        let input = "Time:      7  15   30\nDistance:  9  40\n";
        assert_eq!(part_one(input), None);
    }
}
