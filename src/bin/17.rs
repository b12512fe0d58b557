#![doc = include_str!("../puzzles/17.md")]

use advent_of_code_2023::{
    debugln,
    helpers::{CharGrid, Direction, Pos},
};
use smallvec::SmallVec;

/// How far a crucible moves in a straight line.
#[derive(Debug, Clone, Copy)]
struct Crucible {
    /// Blocks in a row needed before turning or stopping.
    pub min_run: u8,
    /// Blocks in a row allowed before having to turn.
    pub max_run: u8,
}

const CRUCIBLE: Crucible = Crucible {
    min_run: 0,
    max_run: 3,
};

const ULTRA_CRUCIBLE: Crucible = Crucible {
    min_run: 4,
    max_run: 10,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct State {
    pub pos: Pos,
    /// `None` before the first move.
    pub dir: Option<Direction>,
    /// Blocks moved in a row in `dir`.
    pub run: u8,
}

struct City {
    /// Heat loss of every block.
    blocks: Vec<Vec<u32>>,
    end: Pos,
}

impl City {
    pub fn parse(input: &str) -> Option<Self> {
        let grid = CharGrid::parse(input)?;
        let blocks = (0..grid.rows())
            .map(|row| {
                grid.row(row)
                    .map(|cell| (cell as char).to_digit(10))
                    .collect::<Option<Vec<u32>>>()
            })
            .collect::<Option<_>>()?;
        Some(Self {
            blocks,
            end: grid.bottom_right(),
        })
    }

    #[inline]
    fn heat_loss(&self, pos: Pos) -> Option<u32> {
        let row = self.blocks.get(usize::try_from(pos.y).ok()?)?;
        row.get(usize::try_from(pos.x).ok()?).copied()
    }

    fn successors(&self, state: &State, crucible: Crucible) -> SmallVec<[(State, u32); 3]> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let run = match state.dir {
                    None => 1,
                    Some(prev) if prev == dir.reverse() => return None,
                    Some(prev) if prev == dir => {
                        if state.run >= crucible.max_run {
                            return None;
                        }
                        state.run + 1
                    }
                    Some(_) => {
                        if state.run < crucible.min_run {
                            return None;
                        }
                        1
                    }
                };
                let pos = state.pos + dir.offset();
                let cost = self.heat_loss(pos)?;
                let next = State {
                    pos,
                    dir: Some(dir),
                    run,
                };
                Some((next, cost))
            })
            .collect()
    }

    /// The least heat loss from the top-left to the bottom-right block.
    pub fn least_heat_loss(&self, crucible: Crucible) -> Option<u32> {
        let start = State {
            pos: Pos::ZERO,
            dir: None,
            run: 0,
        };
        let successors = |state: &State| self.successors(state, crucible);
        let heuristic = |state: &State| -> u32 {
            let to_go = (self.end - state.pos).abs();
            (to_go.x + to_go.y) as u32
        };
        let success = |state: &State| state.pos == self.end && state.run >= crucible.min_run;

        let (path, cost) =
            pathfinding::directed::astar::astar(&start, successors, heuristic, success)?;

        debugln!("{crucible:?}: {} moves, heat loss {cost}", path.len() - 1);

        Some(cost)
    }
}

/// Returns the least heat loss of a crucible.
pub fn part_one(input: &str) -> Option<u32> {
    City::parse(input)?.least_heat_loss(CRUCIBLE)
}

/// Returns the least heat loss of an ultra crucible.
pub fn part_two(input: &str) -> Option<u32> {
    City::parse(input)?.least_heat_loss(ULTRA_CRUCIBLE)
}

fn main() {
    let input = &advent_of_code_2023::read_file("inputs", 17);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}
