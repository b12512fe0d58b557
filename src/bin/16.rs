#![doc = include_str!("../puzzles/16.md")]

use advent_of_code_2023::{
    debugln,
    helpers::{CharGrid, Direction, Pos},
};
use bitvec::prelude::*;
use rayon::prelude::*;
use smallvec::{smallvec, SmallVec};

/// The directions a beam heading `dir` leaves `cell` in.
fn deflect(cell: u8, dir: Direction) -> SmallVec<[Direction; 2]> {
    use Direction::*;

    match (cell, dir) {
        (b'/', Right) => smallvec![Up],
        (b'/', Up) => smallvec![Right],
        (b'/', Left) => smallvec![Down],
        (b'/', Down) => smallvec![Left],
        (b'\\', Right) => smallvec![Down],
        (b'\\', Down) => smallvec![Right],
        (b'\\', Left) => smallvec![Up],
        (b'\\', Up) => smallvec![Left],
        (b'|', Left | Right) => smallvec![Up, Down],
        (b'-', Up | Down) => smallvec![Left, Right],
        _ => smallvec![dir],
    }
}

struct Contraption {
    grid: CharGrid,
}

impl Contraption {
    pub fn parse(input: &str) -> Option<Self> {
        let grid = CharGrid::parse(input)?;
        if !grid
            .cells()
            .all(|cell| matches!(cell, b'.' | b'/' | b'\\' | b'|' | b'-'))
        {
            return None;
        }
        Some(Self { grid })
    }

    #[inline]
    fn tile_index(&self, pos: Pos) -> usize {
        pos.y as usize * self.grid.cols() + pos.x as usize
    }

    /// Number of tiles energized by a beam entering at `start` heading `dir`.
    pub fn energized(&self, start: Pos, dir: Direction) -> usize {
        let tiles = self.grid.rows() * self.grid.cols();
        let mut energized = bitvec![0; tiles];
        // One bit per (tile, direction); a beam repeating one of these is
        // already accounted for.
        let mut seen = bitvec![0; tiles * 4];

        let mut beams = vec![(start, dir)];
        while let Some((pos, dir)) = beams.pop() {
            let Some(cell) = self.grid.get(pos) else {
                continue;
            };
            let tile = self.tile_index(pos);
            if seen.replace(tile * 4 + dir as usize, true) {
                continue;
            }
            energized.set(tile, true);

            for next in deflect(cell, dir) {
                beams.push((pos + next.offset(), next));
            }
        }

        energized.count_ones()
    }

    /// Every edge tile, paired with the direction leading into the grid.
    pub fn entries(&self) -> Vec<(Pos, Direction)> {
        let bottom_right = self.grid.bottom_right();
        let vertical = (0..=bottom_right.x).flat_map(|x| {
            [
                (Pos::new(x, 0), Direction::Down),
                (Pos::new(x, bottom_right.y), Direction::Up),
            ]
        });
        let horizontal = (0..=bottom_right.y).flat_map(|y| {
            [
                (Pos::new(0, y), Direction::Right),
                (Pos::new(bottom_right.x, y), Direction::Left),
            ]
        });
        vertical.chain(horizontal).collect()
    }
}

/// Returns the number of tiles energized from the top-left corner.
pub fn part_one(input: &str) -> Option<usize> {
    let contraption = Contraption::parse(input)?;
    Some(contraption.energized(Pos::ZERO, Direction::Right))
}

/// Returns the most tiles any entry energizes.
pub fn part_two(input: &str) -> Option<usize> {
    let contraption = Contraption::parse(input)?;
    let entries = contraption.entries();
    debugln!("Trying {} entries", entries.len());
    entries
        .into_par_iter()
        .map(|(start, dir)| contraption.energized(start, dir))
        .max()
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 16);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2023::read_file("examples", 16);
        assert_eq!(part_one(&input), Some(46));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2023::read_file("examples", 16);
        assert_eq!(part_two(&input), Some(51));
    }

    #[test]
    fn test_loop_terminates() {
        let contraption = Contraption::parse("/.\\\n...\n\\./").unwrap();
        assert_eq!(contraption.energized(Pos::new(1, 0), Direction::Right), 8);
    }

    #[test]
    fn test_splitter_pointy_end() {
        let contraption = Contraption::parse("-..\n|..").unwrap();
        assert_eq!(contraption.energized(Pos::ZERO, Direction::Right), 3);
        assert_eq!(contraption.energized(Pos::ZERO, Direction::Down), 3);
    }

    #[test]
    fn test_invalid_cell() {
        assert_eq!(part_one("./\n.#"), None);
        assert_eq!(part_two("./\n.#"), None);
    }
}
