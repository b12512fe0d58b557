#![doc = include_str!("../puzzles/03.md")]

use std::ops::Range;

use advent_of_code_2023::{
    debugln,
    helpers::{CharGrid, Pos},
};
use itertools::Itertools;

/// A number in the schematic, spanning columns `cols` of row `row`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Number {
    pub value: u32,
    pub row: i32,
    pub cols: Range<i32>,
}

impl Number {
    /// Every position touching the number, diagonals included. Some of them
    /// may lie outside of the grid.
    pub fn surroundings(&self) -> impl Iterator<Item = Pos> + '_ {
        let left = self.cols.start - 1;
        let right = self.cols.end;
        let above_and_below = (left..=right)
            .flat_map(move |x| [Pos::new(x, self.row - 1), Pos::new(x, self.row + 1)]);
        let sides = [Pos::new(left, self.row), Pos::new(right, self.row)];
        above_and_below.chain(sides)
    }
}

#[inline]
fn is_symbol(cell: u8) -> bool {
    cell != b'.' && !cell.is_ascii_digit()
}

struct Schematic {
    pub grid: CharGrid,
    pub numbers: Vec<Number>,
}

impl Schematic {
    pub fn parse(input: &str) -> Option<Self> {
        let grid = CharGrid::parse(input)?;

        let mut numbers = Vec::new();
        for row in 0..grid.rows() {
            let cells: Vec<u8> = grid.row(row).collect();
            let runs = cells
                .iter()
                .enumerate()
                .group_by(|(_, cell)| cell.is_ascii_digit());
            for (is_digit, run) in &runs {
                if !is_digit {
                    continue;
                }
                let run: Vec<(usize, &u8)> = run.collect();
                let start = run[0].0;
                let value = run
                    .iter()
                    .fold(0, |value, &(_, &digit)| value * 10 + u32::from(digit - b'0'));
                numbers.push(Number {
                    value,
                    row: row as i32,
                    cols: start as i32..(start + run.len()) as i32,
                });
            }
        }

        debugln!("Found {} numbers", numbers.len());

        Some(Self { grid, numbers })
    }

    /// The cells around `number` that lie inside the grid.
    fn cells_around<'a>(&'a self, number: &'a Number) -> impl Iterator<Item = (Pos, u8)> + 'a {
        number
            .surroundings()
            .filter_map(|pos| self.grid.get(pos).map(|cell| (pos, cell)))
    }

    pub fn part_numbers(&self) -> impl Iterator<Item = &Number> + '_ {
        self.numbers
            .iter()
            .filter(|number| self.cells_around(number).any(|(_, cell)| is_symbol(cell)))
    }

    /// The ratio of every `*` adjacent to exactly two numbers.
    pub fn gear_ratios(&self) -> impl Iterator<Item = u32> {
        let stars = self
            .numbers
            .iter()
            .flat_map(|number| {
                self.cells_around(number)
                    .filter(|&(_, cell)| cell == b'*')
                    .map(move |(pos, _)| (pos, number.value))
            })
            .into_group_map();

        stars.into_iter().filter_map(|(pos, values)| match values[..] {
            [a, b] => {
                debugln!("Gear at {pos}: {a} * {b}");
                Some(a * b)
            }
            _ => None,
        })
    }
}

/// Returns the sum of all numbers adjacent to a symbol.
pub fn part_one(input: &str) -> Option<u32> {
    let schematic = Schematic::parse(input)?;
    Some(schematic.part_numbers().map(|number| number.value).sum())
}

/// Returns the sum of all gear ratios.
pub fn part_two(input: &str) -> Option<u32> {
    let schematic = Schematic::parse(input)?;
    Some(schematic.gear_ratios().sum())
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 3);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 3);
        assert_eq!(part_one(&input), Some(4361));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 3);
        assert_eq!(part_two(&input), Some(467835));
    }

    #[test]
    fn test_numbers() {
        let schematic = Schematic::parse("..12\n3*..").unwrap();
        assert_eq!(
            schematic.numbers,
            vec![
                Number {
                    value: 12,
                    row: 0,
                    cols: 2..4
                },
                Number {
                    value: 3,
                    row: 1,
                    cols: 0..1
                },
            ]
        );
        assert_eq!(schematic.part_numbers().count(), 2);
        assert_eq!(schematic.gear_ratios().collect::<Vec<_>>(), vec![36]);
    }

    #[test]
    fn test_number_at_right_edge_is_not_part_number() {
        assert_eq!(part_one("....\n..12\n#..."), Some(0));
    }
}
