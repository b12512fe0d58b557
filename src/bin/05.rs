#![doc = include_str!("../puzzles/05.md")]

use std::fmt;
use std::ops::Range;

use advent_of_code_2023::{
    debugln,
    helpers::{parse, Itertools as _},
};
use itertools::Itertools;

/// One line of a map: `source..source + len` moves to `dest..dest + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shift {
    pub dest: i64,
    pub source: i64,
    pub len: i64,
}

impl Shift {
    #[inline]
    pub fn source_range(&self) -> Range<i64> {
        self.source..self.source + self.len
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        self.dest - self.source
    }

    /// Splits `range` into the part covered by this shift (already shifted
    /// into the destination space) and the uncovered remainders below and
    /// above it.
    pub fn split(&self, range: Range<i64>) -> (Option<Range<i64>>, [Option<Range<i64>>; 2]) {
        let source = self.source_range();

        let non_empty = |range: Range<i64>| (!range.is_empty()).then_some(range);

        let below = non_empty(range.start..range.end.min(source.start));
        let above = non_empty(range.start.max(source.end)..range.end);
        let inside = non_empty(range.start.max(source.start)..range.end.min(source.end))
            .map(|inside| inside.start + self.offset()..inside.end + self.offset());

        (inside, [below, above])
    }
}

#[derive(Debug, Clone)]
struct Map {
    pub name: String,
    pub shifts: Vec<Shift>,
}

impl Map {
    pub fn apply(&self, value: i64) -> i64 {
        self.shifts
            .iter()
            .find(|shift| shift.source_range().contains(&value))
            .map_or(value, |shift| value + shift.offset())
    }

    /// Maps every value of every range, splitting ranges at shift boundaries.
    pub fn apply_ranges(&self, ranges: Vec<Range<i64>>) -> Vec<Range<i64>> {
        let mut mapped = Vec::new();
        let mut pending = ranges;

        for shift in self.shifts.iter() {
            let mut unmapped = Vec::new();
            for range in pending.drain(..) {
                let (inside, remainders) = shift.split(range);
                mapped.extend(inside);
                unmapped.extend(remainders.into_iter().flatten());
            }
            pending = unmapped;
        }

        // Whatever no shift covers maps to itself.
        mapped.extend(pending);
        mapped
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} shifts)", self.name, self.shifts.len())
    }
}

#[derive(Debug, Clone)]
struct Almanac {
    pub seeds: Vec<i64>,
    pub maps: Vec<Map>,
}

impl Almanac {
    pub fn parse(input: &str) -> Option<Self> {
        let blocks = input.lines().blocks();
        let (seeds_block, map_blocks) = blocks.split_first()?;

        let seeds = seeds_block.first()?.strip_prefix("seeds:")?;
        let seeds = parse::words(seeds)?;

        let maps = map_blocks
            .iter()
            .map(|block| {
                let (header, lines) = block.split_first()?;
                let name = header.strip_suffix(" map:")?.to_owned();
                let shifts = lines
                    .iter()
                    .map(|line| match parse::words::<i64>(line)?[..] {
                        [dest, source, len] => Some(Shift { dest, source, len }),
                        _ => None,
                    })
                    .collect::<Option<_>>()?;
                Some(Map { name, shifts })
            })
            .collect::<Option<_>>()?;

        Some(Self { seeds, maps })
    }

    pub fn location(&self, seed: i64) -> i64 {
        self.maps.iter().fold(seed, |value, map| map.apply(value))
    }

    pub fn locations(&self, seeds: Vec<Range<i64>>) -> Vec<Range<i64>> {
        self.maps.iter().fold(seeds, |ranges, map| {
            let ranges = map.apply_ranges(ranges);
            debugln!("{map}: {} ranges", ranges.len());
            ranges
        })
    }
}

/// Returns the lowest location of any seed.
pub fn part_one(input: &str) -> Option<i64> {
    let almanac = Almanac::parse(input)?;
    almanac
        .seeds
        .iter()
        .map(|&seed| almanac.location(seed))
        .min()
}

/// Returns the lowest location of any seed in the seed ranges.
pub fn part_two(input: &str) -> Option<i64> {
    let almanac = Almanac::parse(input)?;
    if almanac.seeds.len() % 2 != 0 {
        return None;
    }

    let seed_ranges = almanac
        .seeds
        .iter()
        .tuples()
        .map(|(&start, &len)| start..start + len)
        .collect();

    almanac
        .locations(seed_ranges)
        .into_iter()
        .map(|range| range.start)
        .min()
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 5);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 5);
        assert_eq!(part_one(&input), Some(35));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 5);
        assert_eq!(part_two(&input), Some(46));
    }

    #[test]
    fn test_split() {
        let shift = Shift {
            dest: 30,
            source: 5,
            len: 10,
        };
        assert_eq!(shift.split(10..21), (Some(35..40), [None, Some(15..21)]));
        assert_eq!(shift.split(0..8), (Some(30..33), [Some(0..5), None]));
        assert_eq!(
            shift.split(0..30),
            (Some(30..40), [Some(0..5), Some(15..30)])
        );
        assert_eq!(shift.split(20..25), (None, [None, Some(20..25)]));
    }

    #[test]
    fn test_ranges_match_single_seeds() {
        let input = advent_of_code_2023::read_file("examples", 5);
        let almanac = Almanac::parse(&input).unwrap();
        for seed in 0..100 {
            let ranges = almanac.locations(vec![seed..seed + 1]);
            assert_eq!(ranges, vec![almanac.location(seed)..almanac.location(seed) + 1]);
        }
    }

    #[test]
    fn test_odd_seed_count() {
        let input = advent_of_code_2023::read_file("examples", 5);
        let input = input.replacen("seeds: 79 14 55 13", "seeds: 79 14 55", 1);
        assert_eq!(part_one(&input), Some(43));
        assert_eq!(part_two(&input), None);
    }
}
