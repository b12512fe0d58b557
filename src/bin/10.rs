#![doc = include_str!("../puzzles/10.md")]

use advent_of_code_2023::{
    debugln,
    helpers::{math, CharGrid, Direction, Pos},
};

/// The two directions a pipe tile connects.
fn connections(cell: u8) -> Option<[Direction; 2]> {
    use Direction::*;

    let dirs = match cell {
        b'|' => [Up, Down],
        b'-' => [Left, Right],
        b'L' => [Up, Right],
        b'J' => [Up, Left],
        b'7' => [Down, Left],
        b'F' => [Down, Right],
        _ => return None,
    };
    Some(dirs)
}

struct Maze {
    grid: CharGrid,
    start: Pos,
}

impl Maze {
    pub fn parse(input: &str) -> Option<Self> {
        let grid = CharGrid::parse(input)?;
        let start = grid.find(b'S')?;
        Some(Self { grid, start })
    }

    /// Follows the pipes leaving the start tile towards `dir`.
    ///
    /// Returns every tile of the loop in order, starting with `S`, or `None`
    /// if the pipes lead somewhere other than back to `S`.
    fn trace(&self, mut dir: Direction) -> Option<Vec<Pos>> {
        let mut tiles = vec![self.start];
        let mut pos = self.start;

        loop {
            pos += dir.offset();
            if pos == self.start {
                return Some(tiles);
            }
            if tiles.len() > self.grid.rows() * self.grid.cols() {
                return None;
            }

            let [a, b] = connections(self.grid.get(pos)?)?;
            let came_from = dir.reverse();
            dir = if a == came_from {
                b
            } else if b == came_from {
                a
            } else {
                return None;
            };
            tiles.push(pos);
        }
    }

    /// The tiles of the loop through `S`.
    pub fn main_loop(&self) -> Option<Vec<Pos>> {
        let tiles = Direction::ALL
            .into_iter()
            .find_map(|dir| self.trace(dir))?;
        debugln!("Loop through {} has {} tiles", self.start, tiles.len());
        Some(tiles)
    }
}

/// Returns the number of steps to the tile of the loop farthest from `S`.
pub fn part_one(input: &str) -> Option<usize> {
    let maze = Maze::parse(input)?;
    let tiles = maze.main_loop()?;
    Some(tiles.len() / 2)
}

/// Returns the number of tiles enclosed by the loop.
pub fn part_two(input: &str) -> Option<i64> {
    let maze = Maze::parse(input)?;
    let tiles = maze.main_loop()?;
    let vertices: Vec<(i64, i64)> = tiles
        .iter()
        .map(|pos| (pos.x as i64, pos.y as i64))
        .collect();
    Some(math::interior_points(&vertices, tiles.len() as i64))
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 10);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}
