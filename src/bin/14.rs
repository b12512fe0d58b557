#![doc = include_str!("../puzzles/14.md")]

use std::collections::HashMap;

use advent_of_code_2023::{
    debugln,
    helpers::{CharGrid, Direction, Pos},
};

const ROUND: u8 = b'O';
const CUBE: u8 = b'#';
const EMPTY: u8 = b'.';

const SPIN_CYCLES: usize = 1_000_000_000;

#[derive(Clone)]
struct Platform {
    grid: CharGrid,
}

impl Platform {
    pub fn parse(input: &str) -> Option<Self> {
        let grid = CharGrid::parse(input)?;
        if !grid.cells().all(|cell| matches!(cell, ROUND | CUBE | EMPTY)) {
            return None;
        }
        Some(Self { grid })
    }

    /// Rolls every round rock towards `dir` until it is blocked.
    pub fn tilt(&mut self, dir: Direction) {
        let bottom_right = self.grid.bottom_right();
        // Every line runs from the edge the rocks roll towards, back across
        // the platform.
        let (starts, step): (Vec<Pos>, Pos) = match dir {
            Direction::Up => ((0..=bottom_right.x).map(|x| Pos::new(x, 0)).collect(), Pos::Y),
            Direction::Down => (
                (0..=bottom_right.x)
                    .map(|x| Pos::new(x, bottom_right.y))
                    .collect(),
                Pos::NEG_Y,
            ),
            Direction::Left => ((0..=bottom_right.y).map(|y| Pos::new(0, y)).collect(), Pos::X),
            Direction::Right => (
                (0..=bottom_right.y)
                    .map(|y| Pos::new(bottom_right.x, y))
                    .collect(),
                Pos::NEG_X,
            ),
        };

        for start in starts {
            let mut free = start;
            let mut pos = start;
            while let Some(cell) = self.grid.get(pos) {
                match cell {
                    CUBE => free = pos + step,
                    ROUND => {
                        if free != pos {
                            self.set(free, ROUND);
                            self.set(pos, EMPTY);
                        }
                        free += step;
                    }
                    _ => {}
                }
                pos += step;
            }
        }
    }

    fn set(&mut self, pos: Pos, cell: u8) {
        if let Some(slot) = self.grid.get_mut(pos) {
            *slot = cell;
        }
    }

    pub fn spin_cycle(&mut self) {
        for dir in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
            self.tilt(dir);
        }
    }

    pub fn north_load(&self) -> usize {
        let rows = self.grid.rows();
        self.grid
            .positions()
            .filter(|&(_, cell)| cell == ROUND)
            .map(|(pos, _)| rows - pos.y as usize)
            .sum()
    }

    fn state(&self) -> Vec<u8> {
        self.grid.cells().collect()
    }
}

/// Returns the load after tilting north.
pub fn part_one(input: &str) -> Option<usize> {
    let mut platform = Platform::parse(input)?;
    platform.tilt(Direction::Up);
    debugln!("{}", platform.grid);
    Some(platform.north_load())
}

/// Returns the load after a billion spin cycles.
pub fn part_two(input: &str) -> Option<usize> {
    let mut platform = Platform::parse(input)?;

    // Cycle number at which each arrangement was first seen.
    let mut seen = HashMap::new();
    let mut cycle = 0;
    while cycle < SPIN_CYCLES {
        if let Some(first) = seen.insert(platform.state(), cycle) {
            let period = cycle - first;
            debugln!("Cycle {cycle} repeats cycle {first} (period {period})");
            for _ in 0..(SPIN_CYCLES - cycle) % period {
                platform.spin_cycle();
            }
            break;
        }
        platform.spin_cycle();
        cycle += 1;
    }

    Some(platform.north_load())
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 14);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}
